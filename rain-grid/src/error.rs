/// Error types for layout and projection
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    /// No data points to lay out; the caller shows an empty-year state instead
    #[error("Cannot project an empty date range")]
    EmptyRange,

    /// Points from more than one calendar year were passed to a single plan
    #[error("Data spans years {first} to {last}; a plan covers one year")]
    MixedYears { first: i32, last: i32 },

    /// Non-positive domain or cell size, or a bucket count outside 1..=256
    #[error("Invalid scale: {0}")]
    InvalidScale(String),

    /// A palette endpoint that is not a `#rrggbb` color
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Failed to parse the heatmap configuration
    #[error("Failed to parse heatmap config: {0}")]
    Config(#[from] serde_json::Error),
}
