//! CSV record writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::TIMESTAMP_FORMAT;
use crate::error::Result;
use crate::record::MessageRecord;

/// Column names of the CSV export, in order.
pub const CSV_HEADER: [&str; 8] = [
    "Timestamp", "Date", "Year", "Month", "Day", "Hour", "Author", "Text",
];

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: see [`CSV_HEADER`]; `Month` and `Day` are English names
/// - Multi-line texts are quoted, embedded newlines kept
/// - Encoding: UTF-8
pub fn write_csv<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    path: impl AsRef<Path>,
) -> Result<()> {
    let file = File::create(path)?;
    write_records(records, file)
}

/// Converts records to a CSV string.
///
/// Same layout as [`write_csv`].
pub fn to_csv<'a>(records: impl IntoIterator<Item = &'a MessageRecord>) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<'a, W: Write>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    sink: W,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(build_row(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_row(record: &MessageRecord) -> [String; 8] {
    [
        record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        record.date.to_string(),
        record.year.to_string(),
        record.month_name.to_string(),
        record.day_name.to_string(),
        record.hour.to_string(),
        record.author.clone(),
        record.text.clone(),
    ]
}
