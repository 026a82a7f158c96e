pub mod cell;
pub mod remote;
pub mod row;
pub mod worklog;

pub use cell::{CellValue, ElapsedTime};
pub use remote::{RemoteUser, RemoteWorklog};
pub use row::RawRow;
pub use worklog::WorklogRecord;
