//! JSON Lines record writer.
//!
//! One compact record per line, convenient for `jq` and log pipelines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a JSONL file.
///
/// ```jsonl
/// {"timestamp":"2020-01-01T10:00:00","date":"2020-01-01",...,"author":"Alice","text":"Hello"}
/// {"timestamp":"2020-01-01T10:05:00","date":"2020-01-01",...,"author":"Bob","text":"Hi"}
/// ```
pub fn write_jsonl<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    path: impl AsRef<Path>,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string, each line terminated by `\n`.
pub fn to_jsonl<'a>(records: impl IntoIterator<Item = &'a MessageRecord>) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<'a, W: Write>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    writer: &mut W,
) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChatParser;
    use tempfile::NamedTempFile;

    #[test]
    fn test_one_record_per_line() {
        let table = ChatParser::new()
            .parse_str("01/01/20, 10:00 - Alice: line one\nline two\n01/01/20, 10:05 - Bob: Hi")
            .table;
        let jsonl = to_jsonl(&table).unwrap();

        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["text"], "line one\nline two");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["author"], "Bob");
    }

    #[test]
    fn test_write_jsonl_file() {
        let table = ChatParser::new().parse_str("01/01/20, 10:00 - Alice: Hi").table;
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&table, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.ends_with('\n'));
        assert_eq!(content, to_jsonl(&table).unwrap());
    }

    #[test]
    fn test_empty_is_empty_string() {
        assert_eq!(to_jsonl(std::iter::empty()).unwrap(), "");
    }
}
