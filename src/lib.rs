pub mod config;
pub mod error;
pub mod groundwater;
pub mod report;
pub mod sensors;
pub mod test;
pub mod time;
pub mod utils;

pub const MIN_CHIPS: usize = 1;
pub const MAX_CHIPS: usize = 20;
