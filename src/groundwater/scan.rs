use super::{
    analyzer::{aggregate, analyze},
    ds::{ChipScan, ScanReport, UnitResult},
};
use crate::{sensors::ReadingSource, time::TimeProvider};
use tracing::{debug, info};

/// Reads and classifies `chips` units, then summarises the farmland.
///
/// The chip count is expected to be validated by the caller; zero chips gives
/// an empty report with a zeroed summary.
pub fn run_scan<S, T>(source: &mut S, time_provider: &T, chips: usize) -> ScanReport
where
    S: ReadingSource + ?Sized,
    T: TimeProvider + ?Sized,
{
    let scanned_at = time_provider.now_utc();
    let mut scans = Vec::with_capacity(chips);

    for chip in 1..=chips {
        let reading = source.next_reading();
        let result = analyze(&reading);
        debug!(
            "Chip {}: moisture {:.1}%, temp {:.1}°C, vibration {:.2}, sound {:.1} dB, nitrate {:.1} ppm -> groundwater {}, risk {:.2}%",
            chip,
            reading.moisture,
            reading.temperature,
            reading.vibration,
            reading.sound,
            reading.nitrate,
            result.groundwater_present,
            result.contamination_risk_pct
        );
        scans.push(ChipScan { chip, reading, result });
    }

    let results: Vec<UnitResult> = scans.iter().map(|s| s.result).collect();
    let summary = aggregate(&results);
    info!(
        "Scan of {} chips: groundwater {} ({} wet), contamination {:.2}%",
        summary.chips,
        if summary.groundwater_present { "present" } else { "absent" },
        summary.chips_with_water,
        summary.contamination_pct
    );

    ScanReport { scanned_at, chips: scans, summary }
}
