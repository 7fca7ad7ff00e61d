/// Error types for record decoding and validation
use thiserror::Error;

/// Errors raised while turning raw input into validated records.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A record whose calendar components do not name a real day, or whose
    /// rainfall is not a finite number.
    #[error("Invalid record {year}/{month}/{day}: {reason}")]
    InvalidRecord {
        year: i32,
        month: i32,
        day: i32,
        reason: String,
    },

    /// Failed to parse JSON input
    #[error("Failed to parse JSON records: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse CSV input
    #[error("Failed to parse CSV records: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to read or decompress input
    #[error("Failed to read records: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP request returned status {0}")]
    HttpStatus(u16),

    /// Input was neither a JSON array nor CSV with the expected header
    #[error("Unrecognized record format: {0}")]
    UnknownFormat(String),
}

/// Type alias for Results using RecordError
pub type Result<T> = std::result::Result<T, RecordError>;
