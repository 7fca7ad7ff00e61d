//! Draw plan structs handed to the renderer.
//!
//! Everything derives `Serialize` (camelCase keys) so the chart app can pass
//! a plan to D3.js as JSON. Cells carry grid indices; paths and labels carry
//! coordinates already multiplied by the cell unit.

use crate::boundary::MonthPath;
use chrono::NaiveDate;
use serde::Serialize;

/// One day cell.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CellRect {
    pub week: u32,
    pub weekday: u32,
    pub date: NaiveDate,
    pub value: f64,
    pub color_bucket: usize,
    /// `#rrggbb` fill.
    pub color: String,
    /// e.g. `"2018-01-01: 5 mm"`
    pub tooltip: String,
}

/// A text label anchored at `(x, y)`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// One legend swatch.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegendEntry {
    pub bucket: usize,
    pub color: String,
    pub label: String,
    /// Inclusive lower threshold of the bucket.
    pub lower: f64,
    /// Exclusive upper threshold; `None` for the open-ended last bucket.
    pub upper: Option<f64>,
}

/// Everything needed to draw one year (or a range inside one year).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrawPlan {
    pub year: i32,
    pub cell_unit: f64,
    /// Grid columns spanned by the cells.
    pub weeks: u32,
    pub cells: Vec<CellRect>,
    pub month_paths: Vec<MonthPath>,
    pub weekday_labels: Vec<TextLabel>,
    pub month_labels: Vec<TextLabel>,
    pub year_label: TextLabel,
    pub legend: Vec<LegendEntry>,
}

impl DrawPlan {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
