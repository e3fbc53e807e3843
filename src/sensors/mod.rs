pub mod interface;
pub mod reading;

pub use interface::{RandomReadingSource, ReadingSource};
pub use reading::{generate, SensorReading};
