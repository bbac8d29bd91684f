//! Export writers for parsed records and reports.
//!
//! - [`write_csv`] / [`to_csv`] - one row per record, `;` delimited (`csv-output` feature)
//! - [`write_json`] / [`to_json`] - JSON array of records (`json-output` feature)
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON record per line (`json-output` feature)
//! - [`write_report_json`] / [`to_report_json`] - a [`Report`](crate::Report) as pretty JSON
//!
//! Every writer accepts any iterator of borrowed records, so both a whole
//! [`RecordTable`](crate::RecordTable) and a filtered
//! [`TableView`](crate::TableView) can be exported.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::output::{to_csv, to_jsonl};
//! use chatstat::{ChatParser, UserFilter};
//!
//! let table = ChatParser::new()
//!     .parse_str("01/01/20, 10:00 - Alice: Hello\n01/01/20, 10:01 - Bob: Hi")
//!     .table;
//!
//! let csv = to_csv(&table)?;
//! assert!(csv.starts_with("Timestamp;Date;Year;Month;Day;Hour;Author;Text"));
//!
//! let bob = table.view(&UserFilter::user("Bob"));
//! let jsonl = to_jsonl(bob.iter())?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, to_report_json, write_json, write_report_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Timestamp layout used in CSV rows.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
