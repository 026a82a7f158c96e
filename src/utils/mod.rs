pub mod date;
pub mod excel_date;
pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::secs2readable;
