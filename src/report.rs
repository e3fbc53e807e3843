//! Text and JSON rendering of a scan.
//!
//! The text form has three parts: the farmland summary, one block per chip,
//! and a two row map of the chips with water tiles labelled by their
//! contamination risk.

use crate::{
    error::AppError,
    groundwater::ds::{ChipScan, ScanReport},
    utils::display_time,
};
use std::fmt::Write;

pub const GRID_ROWS: usize = 2;
const CELL_WIDTH: usize = 9;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Chips laid out row by row on a fixed two row grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn for_chips(chips: usize) -> Self {
        Self { rows: GRID_ROWS, cols: chips.div_ceil(GRID_ROWS) }
    }

    /// (row, col) of the 0-based chip `index`
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

pub fn render_summary(report: &ScanReport) -> String {
    format!(
        "Overall Groundwater Present: {}\nOverall Contamination Risk: {:.2}%\n",
        yes_no(report.summary.groundwater_present),
        report.summary.contamination_pct
    )
}

pub fn render_chip(chip: &ChipScan) -> String {
    let r = &chip.reading;
    let depth = chip.result.estimated_depth_m.map(|d| format!("{} m", d)).unwrap_or_else(|| "n/a".to_owned());
    format!(
        "Hydround Chip #{}:\n\
         - Soil Moisture: {:.1} %\n\
         - Temperature: {:.1} °C\n\
         - Vibration Level: {:.2}\n\
         - Ambient Sound: {:.1} dB\n\
         - Nitrate Level: {:.1} ppm\n\
         - Groundwater Present: {}\n\
         - Contamination Risk: {:.2}%\n\
         - Estimated Depth: {}\n",
        chip.chip,
        r.moisture,
        r.temperature,
        r.vibration,
        r.sound,
        r.nitrate,
        yes_no(chip.result.groundwater_present),
        chip.result.contamination_risk_pct,
        depth
    )
}

fn cell_label(chip: Option<&ChipScan>) -> String {
    match chip {
        Some(c) if c.result.groundwater_present => format!("~{:.1}%", c.result.contamination_risk_pct),
        Some(_) => "#######".to_owned(),
        None => String::new(),
    }
}

/// `~` tiles found groundwater, `#` tiles are dry, blank slots have no chip.
pub fn render_grid(report: &ScanReport) -> String {
    if report.chips.is_empty() {
        return String::new();
    }
    let layout = GridLayout::for_chips(report.chips.len());
    let mut cells: Vec<Vec<Option<&ChipScan>>> = vec![vec![None; layout.cols]; layout.rows];
    for (idx, chip) in report.chips.iter().enumerate() {
        let (row, col) = layout.position(idx);
        cells[row][col] = Some(chip);
    }

    let border = format!("+{}\n", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(layout.cols));
    let mut out = border.clone();
    for row in &cells {
        out.push('|');
        for cell in row {
            // writing to a String cannot fail
            _ = write!(out, "{:^width$}|", cell_label(*cell), width = CELL_WIDTH);
        }
        out.push('\n');
        out.push_str(&border);
    }
    out
}

pub fn render_text(report: &ScanReport) -> String {
    let mut out = format!("Hydround scan at {}\n\n", display_time(report.scanned_at));
    out.push_str(&render_summary(report));
    out.push_str("\nIndividual Hydround Chip Sensor Results:\n");
    for chip in &report.chips {
        out.push('\n');
        out.push_str(&render_chip(chip));
    }
    if !report.chips.is_empty() {
        out.push_str("\nGroundwater map (~ water, # dry):\n");
        out.push_str(&render_grid(report));
    }
    out
}

pub fn render_json(report: &ScanReport) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}
