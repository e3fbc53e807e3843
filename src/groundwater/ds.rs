use crate::sensors::SensorReading;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Classification of a single chip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitResult {
    pub groundwater_present: bool,
    /// 0..=100, always 0 when no groundwater was detected
    pub contamination_risk_pct: f64,
    /// meters, not tied to `groundwater_present`
    pub estimated_depth_m: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct FarmSummary {
    pub groundwater_present: bool,
    /// mean over chips with groundwater, 0 when there are none
    pub contamination_pct: f64,
    pub chips: usize,
    pub chips_with_water: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipScan {
    /// 1-based, as shown to the farmer
    pub chip: usize,
    pub reading: SensorReading,
    pub result: UnitResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub scanned_at: DateTime<Utc>,
    pub chips: Vec<ChipScan>,
    pub summary: FarmSummary,
}
