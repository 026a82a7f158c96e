pub mod create;
pub mod normalize;
pub mod remove;
