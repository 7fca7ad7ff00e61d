/// Error types for store queries and ingestion
use rain_records::RecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// No bucket exists for the requested year
    #[error("No data for year {0}")]
    NotFound(i32),

    /// A record in the ingested batch could not be validated or decoded
    #[error(transparent)]
    InvalidRecord(#[from] RecordError),
}
