//! Heatmap layout and scale settings.

use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Default cell edge length in renderer units.
pub const DEFAULT_CELL_UNIT: f64 = 12.0;
/// Default top of the color domain; values above it share the last bucket.
pub const DEFAULT_DOMAIN_MAX: f64 = 24.0;
/// Default number of legend buckets (three millimetres per bucket).
pub const DEFAULT_BUCKET_COUNT: usize = 8;

/// Settings for [`crate::project`].
///
/// Missing fields in a JSON config fall back to the defaults:
///
/// ```rust
/// use rain_grid::HeatmapConfig;
///
/// let config = HeatmapConfig::from_json(r#"{"domainMax": 16, "bucketCount": 4}"#).unwrap();
/// assert_eq!(config.bucket_count, 4);
/// assert_eq!(config.cell_unit, 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatmapConfig {
    pub cell_unit: f64,
    pub domain_max: f64,
    pub bucket_count: usize,
    /// Color of the first bucket, `#rrggbb`.
    pub low_color: String,
    /// Color of the last bucket, `#rrggbb`.
    pub high_color: String,
    /// Unit appended to tooltip values.
    pub unit_label: String,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            cell_unit: DEFAULT_CELL_UNIT,
            domain_max: DEFAULT_DOMAIN_MAX,
            bucket_count: DEFAULT_BUCKET_COUNT,
            low_color: "#deebf7".to_string(),
            high_color: "#08306b".to_string(),
            unit_label: "mm".to_string(),
        }
    }
}

impl HeatmapConfig {
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(HeatmapConfig::from_json("{}").unwrap(), HeatmapConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = HeatmapConfig::from_json(
            r##"{"cellUnit": 16, "lowColor": "#ffffff", "unitLabel": "in"}"##,
        )
        .unwrap();
        assert_eq!(config.cell_unit, 16.0);
        assert_eq!(config.low_color, "#ffffff");
        assert_eq!(config.unit_label, "in");
        assert_eq!(config.domain_max, DEFAULT_DOMAIN_MAX);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            HeatmapConfig::from_json(r#"{"bucketCount": "eight"}"#),
            Err(GridError::Config(_))
        ));
    }
}
