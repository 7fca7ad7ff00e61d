//! Loading functions for populating the store from encoded record sources.
//!
//! See [`rain_records::source`] for the accepted JSON and CSV layouts.

use crate::{DataStore, StoreError};
use rain_records::source;

impl DataStore {
    /// Load records from a JSON array string.
    ///
    /// # Example JSON
    /// ```text
    /// [{"y": 2018, "m": 0, "d": 1, "rainfall": 5.2}]
    /// ```
    pub fn load_json(&mut self, json_data: &str) -> Result<usize, StoreError> {
        let records = source::parse_json(json_data)?;
        self.ingest(&records)
    }

    /// Load records from a CSV string with a `y,m,d,rainfall` header.
    ///
    /// # Example CSV
    /// ```text
    /// y,m,d,rainfall
    /// 2018,0,1,5.2
    /// ```
    pub fn load_csv(&mut self, csv_data: &str) -> Result<usize, StoreError> {
        let records = source::parse_csv(csv_data)?;
        self.ingest(&records)
    }

    /// Load records from raw bytes in any supported encoding, including
    /// gzip-compressed JSON or CSV.
    pub fn load_bytes(&mut self, data: &[u8]) -> Result<usize, StoreError> {
        let records = source::decode_bytes(data)?;
        self.ingest(&records)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DataStore, StoreError};

    #[test]
    fn load_json_and_csv_agree() {
        let mut from_json = DataStore::new();
        from_json
            .load_json(r#"[{"y":2017,"m":11,"d":31,"rainfall":0.4},{"y":2018,"m":0,"d":1,"rainfall":-1}]"#)
            .unwrap();
        let mut from_csv = DataStore::new();
        from_csv
            .load_csv("y,m,d,rainfall\n2017,11,31,0.4\n2018,0,1,-1\n")
            .unwrap();
        assert_eq!(from_json, from_csv);
        assert_eq!(from_json.available_years(), vec![2017, 2018]);
    }

    #[test]
    fn load_bytes_reports_decode_errors() {
        let mut store = DataStore::new();
        let err = store.load_bytes(b"not a record file").unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord(_)));
    }
}
