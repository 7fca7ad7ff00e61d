//! Year-indexed in-memory store for daily rainfall data.
//!
//! Raw [`DailyRecord`]s are validated into [`DataPoint`]s and bucketed by
//! calendar year. The store is filled once at startup and queried
//! read-only afterwards by the heatmap projector and the chart apps.
//!
//! # Usage
//!
//! ```rust
//! use rain_store::DataStore;
//!
//! let mut store = DataStore::new();
//! store.load_json(r#"[{"y":2018,"m":0,"d":1,"rainfall":5},{"y":2018,"m":0,"d":2,"rainfall":-3}]"#).unwrap();
//!
//! assert_eq!(store.available_years(), vec![2018]);
//! let days = store.get_year(2018).unwrap();
//! assert_eq!(days.len(), 2);
//! assert_eq!(days[1].value, 0.0);
//! assert!(store.get_year(1999).is_err());
//! ```
//!
//! # Ordering
//!
//! Points are placed at their sorted position as they are ingested, so a
//! bucket is ascending by date whatever order the source delivers. A second
//! record for an already stored date replaces the first.

mod error;
mod loader;
pub mod models;
mod queries;

pub use error::StoreError;
pub use models::{YearBucket, YearSummary};
pub use rain_records::{DailyRecord, DataPoint};

use std::collections::BTreeMap;

/// Mapping from calendar year to that year's ordered data points.
///
/// Years are kept in a `BTreeMap`, so every iteration over them is ascending
/// regardless of ingestion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataStore {
    years: BTreeMap<i32, YearBucket>,
}

impl DataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a batch of raw records.
    ///
    /// Every record is validated before the store is touched: if any record
    /// is invalid the whole batch is rejected and the store is unchanged.
    /// Returns the number of records ingested.
    pub fn ingest(&mut self, records: &[DailyRecord]) -> Result<usize, StoreError> {
        let points = records
            .iter()
            .map(DailyRecord::to_data_point)
            .collect::<Result<Vec<DataPoint>, _>>()?;

        let mut replaced = 0usize;
        for point in &points {
            let bucket = self.years.entry(point.year()).or_default();
            if bucket.insert(*point) {
                replaced += 1;
            }
        }
        log::info!(
            "store: ingested {} records into {} years ({} replaced)",
            points.len(),
            self.years.len(),
            replaced
        );
        Ok(points.len())
    }

    /// True when no year has been ingested.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
