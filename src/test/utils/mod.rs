pub mod log_capture;
pub mod mock_sensors;
pub mod mock_time;

use crate::sensors::SensorReading;

/// Passes every groundwater threshold, nitrate 25 ppm (50% risk).
pub fn wet_reading() -> SensorReading {
    SensorReading::build(80., 20., 1., 50., 25.)
}

/// Too dry for groundwater, same nitrate as `wet_reading`.
pub fn dry_reading() -> SensorReading {
    SensorReading::build(40., 20., 1., 50., 25.)
}
