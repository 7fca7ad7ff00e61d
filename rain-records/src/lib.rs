//! Daily rainfall records: the raw input unit, its validated form, and the
//! decoders that turn JSON / CSV / gzip payloads into records.

pub mod error;
pub mod record;
pub mod source;

#[cfg(feature = "api")]
pub mod fetch;

pub use error::{RecordError, Result};
pub use record::{DailyRecord, DataPoint};
