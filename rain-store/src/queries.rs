//! Read-only queries over the store.

use crate::models::YearSummary;
use crate::{DataPoint, DataStore, StoreError};
use chrono::{Datelike, NaiveDate};

impl DataStore {
    /// Ordered data points for `year`.
    ///
    /// Fails with [`StoreError::NotFound`] when nothing was ingested for it.
    pub fn get_year(&self, year: i32) -> Result<&[DataPoint], StoreError> {
        self.years
            .get(&year)
            .map(|bucket| bucket.points())
            .ok_or(StoreError::NotFound(year))
    }

    /// Years with at least one data point, ascending.
    pub fn available_years(&self) -> Vec<i32> {
        self.years.keys().copied().collect()
    }

    /// All points with `start <= date <= end`, ascending, possibly spanning
    /// several years. Empty when `start > end`.
    pub fn get_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<DataPoint> {
        if start > end {
            return Vec::new();
        }
        let points: Vec<DataPoint> = self
            .years
            .range(start.year()..=end.year())
            .flat_map(|(_, bucket)| bucket.points())
            .filter(|p| p.date >= start && p.date <= end)
            .copied()
            .collect();
        log::debug!(
            "query: get_range {}..={} returned {} points",
            start,
            end,
            points.len()
        );
        points
    }

    /// Points of `year` narrowed to the optional `start` / `end` bounds
    /// (inclusive). Fails with [`StoreError::NotFound`] for a missing year;
    /// the result may be empty when the bounds exclude every day.
    pub fn get_year_within(
        &self,
        year: i32,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<DataPoint>, StoreError> {
        let points = self.get_year(year)?;
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Ok(Vec::new());
        };
        let start = start.map_or(first.date, |s| s.max(first.date));
        let end = end.map_or(last.date, |e| e.min(last.date));
        Ok(self.get_range(start, end))
    }

    /// Totals for `year`.
    pub fn summary(&self, year: i32) -> Result<YearSummary, StoreError> {
        let points = self.get_year(year)?;
        YearSummary::from_points(year, points).ok_or(StoreError::NotFound(year))
    }
}
