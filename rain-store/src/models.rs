//! Bucket and query result models.

use chrono::NaiveDate;
use rain_records::DataPoint;
use serde::Serialize;

/// Ordered data points for a single calendar year.
///
/// Dates are unique and ascending; [`YearBucket::insert`] keeps it that way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearBucket(Vec<DataPoint>);

impl YearBucket {
    /// Insert a point at its sorted position. A point with the same date
    /// replaces the existing one; returns `true` when that happened.
    pub fn insert(&mut self, point: DataPoint) -> bool {
        match self.0.binary_search_by(|p| p.date.cmp(&point.date)) {
            Ok(i) => {
                self.0[i] = point;
                true
            }
            Err(i) => {
                self.0.insert(i, point);
                false
            }
        }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Totals for one year of rainfall, shown in the chart header.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    pub year: i32,
    /// Days with a measurement.
    pub days: usize,
    /// Days with a measurement above zero.
    pub rainy_days: usize,
    /// Sum of all measurements.
    pub total: f64,
    /// Largest single-day measurement.
    pub max_value: f64,
    /// First day on which `max_value` was measured.
    pub max_date: NaiveDate,
}

impl YearSummary {
    /// Summarize a non-empty bucket. Returns `None` for an empty one.
    pub fn from_points(year: i32, points: &[DataPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut max = *first;
        for point in points {
            if point.value > max.value {
                max = *point;
            }
        }
        Some(Self {
            year,
            days: points.len(),
            rainy_days: points.iter().filter(|p| p.value > 0.0).count(),
            total: points.iter().map(|p| p.value).sum(),
            max_value: max.value,
            max_date: max.date,
        })
    }
}
