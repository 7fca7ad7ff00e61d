use crate::error::{RecordError, Result};
use chrono::{Datelike, NaiveDate};
use rain_utils::dates::utc_date;
use serde::{Deserialize, Serialize};

/// One calendar day of measured rainfall, as delivered by the data source.
///
/// Field names follow the source data set (`y`, `m`, `d`, `rainfall`);
/// the long names are accepted too. `month` is zero-based. Negative
/// `rainfall` values are sentinels for "no data" or error codes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "y", alias = "year")]
    pub year: i32,
    #[serde(rename = "m", alias = "month")]
    pub month: i32,
    #[serde(rename = "d", alias = "day")]
    pub day: i32,
    pub rainfall: f64,
}

impl DailyRecord {
    pub fn new(year: i32, month: i32, day: i32, rainfall: f64) -> Self {
        Self {
            year,
            month,
            day,
            rainfall,
        }
    }

    /// Validate the record and turn it into a [`DataPoint`].
    ///
    /// Out-of-range months or days are rejected rather than rolled over
    /// into a neighbouring month. Negative rainfall is clamped to zero.
    pub fn to_data_point(&self) -> Result<DataPoint> {
        if !self.rainfall.is_finite() {
            return Err(self.invalid("rainfall is not a finite number"));
        }
        if !(0..12).contains(&self.month) {
            return Err(self.invalid("month must be in 0..=11"));
        }
        let date = utc_date(self.year, self.month, self.day)
            .ok_or_else(|| self.invalid("day is outside the month"))?;
        Ok(DataPoint {
            date,
            value: self.rainfall.max(0.0),
        })
    }

    fn invalid(&self, reason: &str) -> RecordError {
        RecordError::InvalidRecord {
            year: self.year,
            month: self.month,
            day: self.day,
            reason: reason.to_string(),
        }
    }
}

/// A validated measurement tied to a UTC day. `value` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl DataPoint {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_rainfall_is_clamped() {
        let point = DailyRecord::new(2018, 0, 2, -3.0).to_data_point().unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2018, 1, 2).unwrap());
        assert_eq!(point.value, 0.0);
    }

    #[test]
    fn test_positive_rainfall_is_kept() {
        let point = DailyRecord::new(2018, 0, 1, 5.0).to_data_point().unwrap();
        assert_eq!(point.value, 5.0);
        assert_eq!(point.year(), 2018);
    }

    #[test]
    fn test_clamp_invariant() {
        for rainfall in [-1.0, -0.5, 0.0, 0.3, 17.2] {
            let point = DailyRecord::new(2017, 5, 10, rainfall)
                .to_data_point()
                .unwrap();
            assert!(point.value >= 0.0);
            assert_eq!(point.value, rainfall.max(0.0));
        }
    }

    #[test]
    fn test_out_of_range_day_is_rejected() {
        let err = DailyRecord::new(2018, 0, 32, 1.0).to_data_point().unwrap_err();
        assert!(matches!(err, RecordError::InvalidRecord { day: 32, .. }));
    }

    #[test]
    fn test_out_of_range_month_is_rejected() {
        let err = DailyRecord::new(2018, 12, 1, 1.0).to_data_point().unwrap_err();
        assert!(matches!(err, RecordError::InvalidRecord { month: 12, .. }));
    }

    #[test]
    fn test_nan_rainfall_is_rejected() {
        assert!(DailyRecord::new(2018, 0, 1, f64::NAN).to_data_point().is_err());
    }

    #[test]
    fn test_deserialize_short_and_long_names() {
        let short: DailyRecord =
            serde_json::from_str(r#"{"y":2018,"m":0,"d":1,"rainfall":5}"#).unwrap();
        let long: DailyRecord =
            serde_json::from_str(r#"{"year":2018,"month":0,"day":1,"rainfall":5.0}"#).unwrap();
        assert_eq!(short, long);
        assert_eq!(short, DailyRecord::new(2018, 0, 1, 5.0));
    }
}
