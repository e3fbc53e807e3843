use super::{
    ds::{FarmSummary, UnitResult},
    DEEP_DEPTH_M, DEEP_MIN_MOISTURE_PCT, MAX_SOUND_DB, MAX_TEMPERATURE_C, MAX_VIBRATION, MEDIUM_DEPTH_M,
    MEDIUM_MIN_MOISTURE_PCT, MIN_MOISTURE_PCT, MIN_TEMPERATURE_C, NITRATE_FULL_RISK_PPM, SHALLOW_DEPTH_M,
    SHALLOW_MAX_VIBRATION, SHALLOW_MIN_MOISTURE_PCT,
};
use crate::sensors::SensorReading;
use tracing::trace;

pub fn is_groundwater_present(reading: &SensorReading) -> bool {
    reading.moisture > MIN_MOISTURE_PCT
        && MIN_TEMPERATURE_C < reading.temperature
        && reading.temperature < MAX_TEMPERATURE_C
        && reading.vibration < MAX_VIBRATION
        && reading.sound < MAX_SOUND_DB
}

/// Nitrate rescaled linearly from 0..=50 ppm to 0..=100 %, clamped.
pub fn contamination_risk_pct(nitrate: f64) -> f64 {
    (nitrate / NITRATE_FULL_RISK_PPM * 100.).clamp(0., 100.)
}

/// Coarse depth guess in meters from moisture and vibration.
pub fn estimate_depth_m(reading: &SensorReading) -> Option<u32> {
    if reading.moisture > SHALLOW_MIN_MOISTURE_PCT && reading.vibration < SHALLOW_MAX_VIBRATION {
        Some(SHALLOW_DEPTH_M)
    } else if reading.moisture > MEDIUM_MIN_MOISTURE_PCT {
        Some(MEDIUM_DEPTH_M)
    } else if reading.moisture > DEEP_MIN_MOISTURE_PCT {
        Some(DEEP_DEPTH_M)
    } else {
        None
    }
}

pub fn analyze(reading: &SensorReading) -> UnitResult {
    let groundwater_present = is_groundwater_present(reading);
    let contamination_risk_pct = if groundwater_present { contamination_risk_pct(reading.nitrate) } else { 0. };
    let estimated_depth_m = estimate_depth_m(reading);
    trace!(
        "Analyzed {:?}: groundwater {}, contamination {:.2}%, depth {:?}",
        reading,
        groundwater_present,
        contamination_risk_pct,
        estimated_depth_m
    );
    UnitResult { groundwater_present, contamination_risk_pct, estimated_depth_m }
}

/// Folds chip results into the farmland summary.
///
/// Contamination is averaged over the chips that found groundwater only, so
/// dry chips (forced to 0%) do not dilute the risk.
pub fn aggregate(results: &[UnitResult]) -> FarmSummary {
    let (chips_with_water, contamination_sum) = results
        .iter()
        .filter(|r| r.groundwater_present)
        .fold((0usize, 0.), |(count, sum), r| (count + 1, sum + r.contamination_risk_pct));

    let contamination_pct = if chips_with_water > 0 { contamination_sum / chips_with_water as f64 } else { 0. };

    FarmSummary {
        groundwater_present: chips_with_water > 0,
        contamination_pct,
        chips: results.len(),
        chips_with_water,
    }
}
