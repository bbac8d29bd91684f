//! JSON writers for records and reports.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::MessageRecord;
use crate::report::Report;

/// Writes records to a JSON file as a pretty-printed array.
///
/// Each element carries every derived field of the record:
/// ```json
/// [
///   {
///     "timestamp": "2020-01-01T10:00:00",
///     "date": "2020-01-01",
///     "year": 2020,
///     "month_num": 1,
///     "hour": 10,
///     "minute": 0,
///     "day_name": "Wednesday",
///     "month_name": "January",
///     "author": "Alice",
///     "text": "Hello"
///   }
/// ]
/// ```
pub fn write_json<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    path: impl AsRef<Path>,
) -> Result<()> {
    let json = to_json(records)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
pub fn to_json<'a>(records: impl IntoIterator<Item = &'a MessageRecord>) -> Result<String> {
    let records: Vec<&MessageRecord> = records.into_iter().collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Writes a report to a JSON file.
pub fn write_report_json(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Converts a report to pretty-printed JSON.
pub fn to_report_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
