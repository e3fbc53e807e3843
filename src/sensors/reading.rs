use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;

/// % volumetric soil moisture
pub const MOISTURE_RANGE: RangeInclusive<f64> = 0.0..=100.0;
/// °C
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 10.0..=35.0;
pub const VIBRATION_RANGE: RangeInclusive<f64> = 0.0..=5.0;
/// dB
pub const SOUND_RANGE: RangeInclusive<f64> = 20.0..=100.0;
/// ppm
pub const NITRATE_RANGE: RangeInclusive<f64> = 0.0..=50.0;

/// One sample from a Hydround chip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReading {
    pub moisture: f64,
    pub temperature: f64,
    pub vibration: f64,
    pub sound: f64,
    pub nitrate: f64,
}

impl SensorReading {
    pub fn build(moisture: f64, temperature: f64, vibration: f64, sound: f64, nitrate: f64) -> Self {
        Self { moisture, temperature, vibration, sound, nitrate }
    }
}

/// Draws every field independently and uniformly from its range.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> SensorReading {
    SensorReading {
        moisture: rng.gen_range(MOISTURE_RANGE),
        temperature: rng.gen_range(TEMPERATURE_RANGE),
        vibration: rng.gen_range(VIBRATION_RANGE),
        sound: rng.gen_range(SOUND_RANGE),
        nitrate: rng.gen_range(NITRATE_RANGE),
    }
}
