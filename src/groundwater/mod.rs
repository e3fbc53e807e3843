pub mod analyzer;
pub mod ds;
pub mod scan;

// groundwater presence, all comparisons strict
pub const MIN_MOISTURE_PCT: f64 = 60.;
pub const MIN_TEMPERATURE_C: f64 = 10.;
pub const MAX_TEMPERATURE_C: f64 = 30.;
pub const MAX_VIBRATION: f64 = 3.;
pub const MAX_SOUND_DB: f64 = 80.;

/// nitrate concentration mapped to 100% contamination risk
pub const NITRATE_FULL_RISK_PPM: f64 = 50.;

// depth estimate, checked in order, all comparisons strict
pub const SHALLOW_MIN_MOISTURE_PCT: f64 = 70.;
pub const SHALLOW_MAX_VIBRATION: f64 = 1.;
pub const MEDIUM_MIN_MOISTURE_PCT: f64 = 50.;
pub const DEEP_MIN_MOISTURE_PCT: f64 = 30.;

pub const SHALLOW_DEPTH_M: u32 = 2;
pub const MEDIUM_DEPTH_M: u32 = 5;
pub const DEEP_DEPTH_M: u32 = 10;
