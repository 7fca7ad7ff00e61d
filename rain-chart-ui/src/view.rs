//! Selects the data points to project for the current selection.

use rain_store::{DataPoint, DataStore, StoreError};
use rain_utils::dates::parse_date;

/// Points of `year`, narrowed to `[start, end]` when those are set.
///
/// `start` / `end` are `YYYY-MM-DD` strings from the date inputs; an empty or
/// unparseable bound leaves that side open. The result may be empty when the
/// range excludes every day of the year.
pub fn visible_points(
    store: &DataStore,
    year: i32,
    start: &str,
    end: &str,
) -> Result<Vec<DataPoint>, StoreError> {
    let start = parse_date(start).ok();
    let end = parse_date(end).ok();
    store.get_year_within(year, start, end)
}
