//! Record export formats.
//!
//! [`OutputFormat`] selects one of the writers in [`output`](crate::output)
//! at runtime, either by name or by file extension.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstat::Result<()> {
//! use chatstat::ChatParser;
//! use chatstat::format::{OutputFormat, write_to_format};
//!
//! let table = ChatParser::new().parse_path("chat.txt".as_ref())?.table;
//!
//! let format = OutputFormat::from_path("records.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! write_to_format(&table, "records.jsonl", format)?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatError, Result};
use crate::record::MessageRecord;

/// Export format for parsed records.
///
/// - [`Csv`](OutputFormat::Csv) - `;` delimited rows, opens in spreadsheets
/// - [`Json`](OutputFormat::Json) - one pretty-printed array
/// - [`Jsonl`](OutputFormat::Jsonl) - one record per line
///
/// # Example
///
/// ```rust
/// use chatstat::format::OutputFormat;
///
/// let format = OutputFormat::from_path("records.ndjson").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, also accepted as `ndjson`
    #[cfg_attr(feature = "cli", value(alias = "ndjson"))]
    #[serde(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("output.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatstatError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

/// Writes records to a file in the specified format.
///
/// # Errors
///
/// Returns an error if the writer for `format` is not compiled in or the
/// file cannot be written.
#[allow(unused_variables)]
pub fn write_to_format<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(records, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(records, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::write_jsonl(records, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts records to a string in the specified format.
///
/// ```rust
/// # #[cfg(feature = "json-output")]
/// # fn example() -> chatstat::Result<()> {
/// use chatstat::ChatParser;
/// use chatstat::format::{OutputFormat, to_format_string};
///
/// let table = ChatParser::new().parse_str("01/01/20, 10:00 - Alice: Hello!").table;
/// let jsonl = to_format_string(&table, OutputFormat::Jsonl)?;
/// assert_eq!(jsonl.lines().count(), 1);
/// # Ok(())
/// # }
/// ```
#[allow(unused_variables)]
pub fn to_format_string<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::to_jsonl(records),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatstatError {
    let feature = match format {
        OutputFormat::Csv => "csv-output",
        OutputFormat::Json | OutputFormat::Jsonl => "json-output",
    };
    ChatstatError::invalid_format(
        "output",
        format!("Output format {format} requires the '{feature}' feature to be enabled"),
    )
}
