//! Date to grid cell mapping.
//!
//! The grid has one column per week and one row per weekday, Monday on top.
//! Columns restart at January 1, so the first column of a year is usually
//! partial.

use chrono::{Datelike, NaiveDate};
use rain_utils::dates::start_of_year;
use serde::Serialize;

/// Number of rows in the grid.
pub const DAYS_PER_WEEK: u32 = 7;

/// Grid position of a day within its year's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellCoordinate {
    /// Column: Monday week-starts between January 1 and the date.
    pub week: u32,
    /// Row: 0 = Monday … 6 = Sunday.
    pub weekday: u32,
}

/// Monday-based weekday row of `date`.
pub fn weekday_of(date: &NaiveDate) -> u32 {
    // chrono numbers Sunday as 0 here; shift so Monday becomes 0.
    (date.weekday().num_days_from_sunday() + 6) % DAYS_PER_WEEK
}

/// Week column of `date`: the Mondays falling after January 1 of its year
/// and on or before the date itself. January 1 is always column 0, and each
/// Monday opens a new column.
pub fn week_of(date: &NaiveDate) -> u32 {
    let jan1 = start_of_year(date);
    (date.ordinal0() + weekday_of(&jan1)) / DAYS_PER_WEEK
}

/// Cell coordinate of `date`.
pub fn coordinate_of(date: &NaiveDate) -> CellCoordinate {
    CellCoordinate {
        week: week_of(date),
        weekday: weekday_of(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
        date(year, 1, 1).iter_days().take_while(move |d| d.year() == year)
    }

    #[test]
    fn test_known_coordinates_2018() {
        // 2018-01-01 and 2018-12-31 are both Mondays.
        assert_eq!(coordinate_of(&date(2018, 1, 1)), CellCoordinate { week: 0, weekday: 0 });
        assert_eq!(coordinate_of(&date(2018, 12, 31)), CellCoordinate { week: 52, weekday: 0 });
        assert_eq!(coordinate_of(&date(2018, 1, 7)), CellCoordinate { week: 0, weekday: 6 });
        assert_eq!(coordinate_of(&date(2018, 1, 8)), CellCoordinate { week: 1, weekday: 0 });
    }

    #[test]
    fn test_partial_first_week() {
        // 2019-01-01 is a Tuesday: the first column holds Tue..Sun.
        assert_eq!(coordinate_of(&date(2019, 1, 1)), CellCoordinate { week: 0, weekday: 1 });
        assert_eq!(coordinate_of(&date(2019, 1, 6)), CellCoordinate { week: 0, weekday: 6 });
        assert_eq!(coordinate_of(&date(2019, 1, 7)), CellCoordinate { week: 1, weekday: 0 });
        // 2017-01-01 is a Sunday: alone in column 0.
        assert_eq!(coordinate_of(&date(2017, 1, 1)), CellCoordinate { week: 0, weekday: 6 });
        assert_eq!(coordinate_of(&date(2017, 1, 2)), CellCoordinate { week: 1, weekday: 0 });
    }

    #[test]
    fn test_january_first_is_week_zero() {
        for year in 1990..2040 {
            assert_eq!(week_of(&date(year, 1, 1)), 0, "year {year}");
        }
    }

    #[test]
    fn test_weekday_range_and_monday_is_zero() {
        for year in [2016, 2017, 2018, 2020] {
            for d in days_of_year(year) {
                let c = coordinate_of(&d);
                assert!(c.weekday < 7);
                assert_eq!(c.weekday == 0, d.weekday() == Weekday::Mon);
                assert_eq!(c.weekday, d.weekday().num_days_from_monday());
            }
        }
    }

    #[test]
    fn test_weeks_are_monotonic_within_a_year() {
        for year in 2015..2025 {
            let mut previous = 0;
            for d in days_of_year(year) {
                let week = week_of(&d);
                assert!(week >= previous, "{d} went back to week {week}");
                assert!(week <= previous + 1);
                if week == previous + 1 {
                    assert_eq!(d.weekday(), Weekday::Mon, "{d} opened a column");
                }
                previous = week;
            }
        }
    }

    #[test]
    fn test_no_two_days_share_a_cell() {
        let mut seen = std::collections::HashSet::new();
        for d in days_of_year(2020) {
            assert!(seen.insert(coordinate_of(&d)), "{d} collides");
        }
        assert_eq!(seen.len(), 366);
    }

    #[test]
    fn test_deterministic() {
        let d = date(2021, 6, 15);
        assert_eq!(coordinate_of(&d), coordinate_of(&d));
    }
}
