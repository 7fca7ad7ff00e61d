//! Builds a [`DrawPlan`] from one year of data points.

use crate::boundary::month_boundaries;
use crate::color::ColorScale;
use crate::config::HeatmapConfig;
use crate::error::GridError;
use crate::mapper::{coordinate_of, week_of, weekday_of, DAYS_PER_WEEK};
use crate::plan::{CellRect, DrawPlan, TextLabel};
use chrono::{Datelike, NaiveDate};
use rain_records::DataPoint;
use rain_utils::dates::{format_date, month_starts_after};
use rain_utils::numbers::format_value;

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Lay out `points` (ascending, all in one calendar year) as a heatmap.
///
/// Fails with [`GridError::EmptyRange`] for an empty slice; callers render
/// their own empty-year state in that case.
pub fn project(points: &[DataPoint], config: &HeatmapConfig) -> Result<DrawPlan, GridError> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(GridError::EmptyRange);
    };
    if first.year() != last.year() {
        return Err(GridError::MixedYears {
            first: first.year(),
            last: last.year(),
        });
    }
    let unit = config.cell_unit;
    if !unit.is_finite() || unit <= 0.0 {
        return Err(GridError::InvalidScale(format!(
            "cell unit must be positive, got {unit}"
        )));
    }
    let scale = ColorScale::from_config(config)?;

    let cells: Vec<CellRect> = points
        .iter()
        .map(|point| {
            let coordinate = coordinate_of(&point.date);
            let bucket = scale.bucket_of(point.value);
            CellRect {
                week: coordinate.week,
                weekday: coordinate.weekday,
                date: point.date,
                value: point.value,
                color_bucket: bucket,
                color: scale.color_of(bucket).to_hex(),
                tooltip: format!(
                    "{}: {} {}",
                    format_date(&point.date),
                    format_value(point.value),
                    config.unit_label
                ),
            }
        })
        .collect();
    let weeks = cells.iter().map(|c| c.week + 1).max().unwrap_or(0);

    let plan = DrawPlan {
        year: first.year(),
        cell_unit: unit,
        weeks,
        month_paths: month_boundaries(points, unit),
        weekday_labels: weekday_labels(unit),
        month_labels: month_labels(points, unit),
        year_label: TextLabel {
            x: 0.0,
            y: -1.5 * unit,
            text: first.year().to_string(),
        },
        legend: scale.legend(),
        cells,
    };
    log::debug!(
        "projector: {} cells, {} month paths over {} weeks for {}",
        plan.cells.len(),
        plan.month_paths.len(),
        plan.weeks,
        plan.year
    );
    Ok(plan)
}

fn weekday_labels(unit: f64) -> Vec<TextLabel> {
    WEEKDAY_LABELS
        .iter()
        .zip(0..DAYS_PER_WEEK)
        .map(|(text, row)| TextLabel {
            x: -0.5 * unit,
            y: (row as f64 + 0.5) * unit,
            text: text.to_string(),
        })
        .collect()
}

/// Month names above the first full column of each month in range (the
/// first month is labelled at the column of its first point).
fn month_labels(points: &[DataPoint], unit: f64) -> Vec<TextLabel> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let label = |date: NaiveDate, column: u32| TextLabel {
        x: column as f64 * unit,
        y: -0.5 * unit,
        text: MONTH_LABELS[date.month0() as usize].to_string(),
    };
    std::iter::once(label(first.date, week_of(&first.date)))
        .chain(month_starts_after(first.date, last.date).map(|date| {
            let column = week_of(&date) + u32::from(weekday_of(&date) != 0);
            label(date, column)
        }))
        .collect()
}
