//! Decoders for the daily record sources.
//!
//! Two layouts are understood:
//!
//! - **JSON**: an array of `{"y": 2018, "m": 0, "d": 1, "rainfall": 5.2}`
//! - **CSV** (with headers): `y,m,d,rainfall`
//!
//! Either payload may be gzip-compressed; [`decode_bytes`] detects the gzip
//! magic number and inflates before parsing.

use crate::error::{RecordError, Result};
use crate::record::DailyRecord;
use csv::{ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use std::io::Read;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Parse a JSON array of daily records.
pub fn parse_json(input: &str) -> Result<Vec<DailyRecord>> {
    let records: Vec<DailyRecord> = serde_json::from_str(input)?;
    log::debug!("source: parsed {} JSON records", records.len());
    Ok(records)
}

/// Parse CSV daily records. The header row names the columns, so column
/// order is free.
pub fn parse_csv(input: &str) -> Result<Vec<DailyRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(input.as_bytes());
    let records = rdr
        .deserialize::<DailyRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    log::debug!("source: parsed {} CSV records", records.len());
    Ok(records)
}

/// Parse records from text, picking JSON or CSV from the content.
pub fn parse_records(input: &str) -> Result<Vec<DailyRecord>> {
    let trimmed = input.trim_start();
    if trimmed.starts_with('[') {
        return parse_json(trimmed);
    }
    let header = trimmed.lines().next().unwrap_or("");
    if header.split(',').any(|col| col.trim() == "rainfall") {
        return parse_csv(trimmed);
    }
    let preview: String = header.chars().take(40).collect();
    Err(RecordError::UnknownFormat(preview))
}

/// Inflate a gzip payload into a UTF-8 string.
pub fn decompress_gzip(input: &[u8]) -> Result<String> {
    let mut decoder = GzDecoder::new(input);
    let mut out = String::new();
    decoder.read_to_string(&mut out)?;
    Ok(out)
}

/// Decode raw bytes (plain or gzip-compressed text) into records.
pub fn decode_bytes(input: &[u8]) -> Result<Vec<DailyRecord>> {
    if input.starts_with(&GZIP_MAGIC) {
        let text = decompress_gzip(input)?;
        return parse_records(&text);
    }
    let text = std::str::from_utf8(input)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    parse_records(text)
}
