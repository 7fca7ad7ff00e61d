//! Shared utility functions for the rainfall heatmap crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Build a UTC calendar date from a year, a zero-based month and a
    /// day of month. Returns `None` when any component is out of range,
    /// instead of rolling over into the next month the way `Date.UTC` does.
    pub fn utc_date(year: i32, month0: i32, day: i32) -> Option<NaiveDate> {
        let month = u32::try_from(month0).ok()?.checked_add(1)?;
        let day = u32::try_from(day).ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// January 1 of the date's year.
    pub fn start_of_year(date: &NaiveDate) -> NaiveDate {
        // Day 1 of month 1 exists for every year chrono can represent.
        date.with_ordinal(1).unwrap_or(*date)
    }

    /// The first day of the month following `date`'s month.
    pub fn first_of_next_month(date: &NaiveDate) -> Option<NaiveDate> {
        let (year, month) = match date.month() {
            12 => (date.year() + 1, 1),
            m => (date.year(), m + 1),
        };
        NaiveDate::from_ymd_opt(year, month, 1)
    }

    /// Iterator over the first-of-month dates `t` with `start < t <= end`.
    pub fn month_starts_after(start: NaiveDate, end: NaiveDate) -> MonthStarts {
        MonthStarts {
            next: first_of_next_month(&start),
            end,
        }
    }

    /// See [`month_starts_after`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MonthStarts {
        next: Option<NaiveDate>,
        end: NaiveDate,
    }

    impl Iterator for MonthStarts {
        type Item = NaiveDate;

        fn next(&mut self) -> Option<Self::Item> {
            let current = self.next.filter(|d| *d <= self.end)?;
            self.next = first_of_next_month(&current);
            Some(current)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_utc_date_zero_based_month() {
            let d = utc_date(2018, 0, 1).unwrap();
            assert_eq!(d, NaiveDate::from_ymd_opt(2018, 1, 1).unwrap());
            let d = utc_date(2018, 11, 31).unwrap();
            assert_eq!(d, NaiveDate::from_ymd_opt(2018, 12, 31).unwrap());
        }

        #[test]
        fn test_utc_date_rejects_overflow() {
            assert!(utc_date(2018, 0, 32).is_none());
            assert!(utc_date(2018, 12, 1).is_none());
            assert!(utc_date(2018, -1, 1).is_none());
            assert!(utc_date(2018, 1, 29).is_none()); // 2018 is not a leap year
            assert!(utc_date(2018, 0, 0).is_none());
            assert!(utc_date(2020, 1, 29).is_some());
        }

        #[test]
        fn test_start_of_year() {
            let d = NaiveDate::from_ymd_opt(2019, 7, 14).unwrap();
            assert_eq!(start_of_year(&d), NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        }

        #[test]
        fn test_first_of_next_month_wraps_year() {
            let d = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
            assert_eq!(
                first_of_next_month(&d),
                NaiveDate::from_ymd_opt(2019, 1, 1)
            );
            let d = NaiveDate::from_ymd_opt(2018, 2, 1).unwrap();
            assert_eq!(
                first_of_next_month(&d),
                NaiveDate::from_ymd_opt(2018, 3, 1)
            );
        }

        #[test]
        fn test_month_starts_after() {
            let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
            let end = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
            let starts: Vec<NaiveDate> = month_starts_after(start, end).collect();
            assert_eq!(starts.len(), 11);
            assert_eq!(starts[0], NaiveDate::from_ymd_opt(2018, 2, 1).unwrap());
            assert_eq!(starts[10], NaiveDate::from_ymd_opt(2018, 12, 1).unwrap());
        }

        #[test]
        fn test_month_starts_after_includes_end_when_first_of_month() {
            let start = NaiveDate::from_ymd_opt(2018, 3, 15).unwrap();
            let end = NaiveDate::from_ymd_opt(2018, 4, 1).unwrap();
            let starts: Vec<NaiveDate> = month_starts_after(start, end).collect();
            assert_eq!(starts, vec![end]);
        }

        #[test]
        fn test_month_starts_within_single_month() {
            let start = NaiveDate::from_ymd_opt(2018, 3, 2).unwrap();
            let end = NaiveDate::from_ymd_opt(2018, 3, 30).unwrap();
            assert_eq!(month_starts_after(start, end).count(), 0);
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }
    }
}

/// Number formatting for labels and tooltips
pub mod numbers {
    /// Format a value with at most one decimal, dropping a trailing ".0".
    ///
    /// `3.0` prints as `"3"`, `2.625` as `"2.6"`.
    pub fn format_value(value: f64) -> String {
        let rounded = (value * 10.0).round() / 10.0;
        if rounded.fract() == 0.0 {
            format!("{:.0}", rounded)
        } else {
            format!("{:.1}", rounded)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::format_value;

        #[test]
        fn test_format_value() {
            assert_eq!(format_value(0.0), "0");
            assert_eq!(format_value(3.0), "3");
            assert_eq!(format_value(21.0), "21");
            assert_eq!(format_value(2.625), "2.6");
            assert_eq!(format_value(0.04), "0");
            assert_eq!(format_value(12.36), "12.4");
        }
    }
}
