//! Streaming CSV loader.
//!
//! Reads the export record by record, never materializing the file.
//! Quoted fields with embedded commas, doubled-quote escapes, and
//! newlines inside quotes are handled; anything fancier is the
//! exporter's problem. Rows missing the message column are skipped with
//! a warning, so one truncated row never aborts an analysis.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use banter_types::LoadError;
use tracing::warn;

/// Streams the named column of a CSV file into `sink`, row by row.
///
/// The first record is the header; `column` selects the field by name.
/// Returns the number of data rows fed to the sink.
///
/// # Errors
///
/// Returns [`LoadError`] when the file cannot be opened or read, when
/// it contains no header row, or when the header lacks `column`.
pub fn load_column<F>(path: &Path, column: &str, mut sink: F) -> Result<u64, LoadError>
where
    F: FnMut(&str),
{
    let display = path.display().to_string();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: display.clone(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let mut records = Records::new(&mut reader, &display);

    let header = match records.next_record()? {
        Some(fields) => fields,
        None => return Err(LoadError::Empty { path: display }),
    };

    let index = header
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| LoadError::MissingColumn {
            column: column.to_string(),
            available: header.clone(),
        })?;

    let mut rows = 0u64;
    let mut record_number = 1u64;
    while let Some(fields) = records.next_record()? {
        record_number += 1;
        match fields.get(index) {
            Some(message) => {
                sink(message);
                rows += 1;
            }
            None => warn!(
                record = record_number,
                fields = fields.len(),
                "record is missing the message column; skipped"
            ),
        }
    }

    Ok(rows)
}

/// Record-at-a-time CSV reader over buffered input.
struct Records<'a, R: BufRead> {
    reader: &'a mut R,
    path: &'a str,
    line: String,
}

impl<'a, R: BufRead> Records<'a, R> {
    fn new(reader: &'a mut R, path: &'a str) -> Self {
        Self {
            reader,
            path,
            line: String::new(),
        }
    }

    /// Reads one CSV record, joining physical lines while a quoted
    /// field remains open. Blank lines are skipped. Returns `None` at
    /// end of input.
    fn next_record(&mut self) -> Result<Option<Vec<String>>, LoadError> {
        loop {
            self.line.clear();
            let mut saw_data = false;

            loop {
                let read =
                    self.reader
                        .read_line(&mut self.line)
                        .map_err(|source| LoadError::Read {
                            path: self.path.to_string(),
                            source,
                        })?;
                if read == 0 {
                    break;
                }
                saw_data = true;

                if self.line.ends_with('\n') {
                    self.line.pop();
                    if self.line.ends_with('\r') {
                        self.line.pop();
                    }
                }

                if !in_open_quote(&self.line) {
                    break;
                }
                // the record continues: a quoted field spans this newline
                self.line.push('\n');
            }

            if !saw_data {
                return Ok(None);
            }
            if self.line.is_empty() {
                continue;
            }
            return Ok(Some(parse_record(&self.line)));
        }
    }
}

/// Returns `true` if the record so far ends inside an open quoted field.
///
/// A doubled quote toggles twice, so escapes cancel out and simple
/// parity is enough.
fn in_open_quote(record: &str) -> bool {
    let mut open = false;
    for b in record.bytes() {
        if b == b'"' {
            open = !open;
        }
    }
    open
}

/// Splits one complete CSV record into fields.
///
/// Handles quoted fields (quotes recognized only at field start) and
/// doubled-quote escapes inside them.
fn parse_record(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    fn load(content: &str, column: &str) -> Result<Vec<String>, LoadError> {
        let file = write_csv(content);
        let mut messages = Vec::new();
        load_column(file.path(), column, |m| messages.push(m.to_string()))?;
        Ok(messages)
    }

    #[test]
    fn reads_named_column() {
        let messages = load(
            "date,sender,message\n2024-01-01,ana,hello world\n2024-01-02,bo,ok\n",
            "message",
        )
        .unwrap();
        assert_eq!(messages, vec!["hello world", "ok"]);
    }

    #[test]
    fn column_need_not_be_first() {
        let messages = load("message,extra\nhi,x\n", "extra").unwrap();
        assert_eq!(messages, vec!["x"]);
    }

    #[test]
    fn quoted_field_keeps_commas() {
        let messages = load("message\n\"hello, world\"\n", "message").unwrap();
        assert_eq!(messages, vec!["hello, world"]);
    }

    #[test]
    fn doubled_quotes_unescape() {
        let messages = load("message\n\"she said \"\"hi\"\"\"\n", "message").unwrap();
        assert_eq!(messages, vec!["she said \"hi\""]);
    }

    #[test]
    fn quoted_field_spans_newlines() {
        let messages = load("message\n\"line one\nline two\"\n", "message").unwrap();
        assert_eq!(messages, vec!["line one\nline two"]);
    }

    #[test]
    fn crlf_line_endings() {
        let messages = load("message\r\nhello\r\nworld\r\n", "message").unwrap();
        assert_eq!(messages, vec!["hello", "world"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let messages = load("message\nhello\n\nworld\n", "message").unwrap();
        assert_eq!(messages, vec!["hello", "world"]);
    }

    #[test]
    fn short_rows_are_skipped() {
        let messages = load("a,message\nx,hello\nlonely\ny,world\n", "message").unwrap();
        assert_eq!(messages, vec!["hello", "world"]);
    }

    #[test]
    fn missing_column_lists_header() {
        let err = load("date,sender\n2024,ana\n", "message").unwrap_err();
        match err {
            LoadError::MissingColumn { column, available } => {
                assert_eq!(column, "message");
                assert_eq!(available, vec!["date", "sender"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_errors() {
        let err = load("", "message").unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn missing_file_errors() {
        let mut called = false;
        let err = load_column(Path::new("/nonexistent/banter.csv"), "message", |_| {
            called = true;
        })
        .unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(!called);
    }

    #[test]
    fn returns_row_count() {
        let file = write_csv("message\na\nb\nc\n");
        let rows = load_column(file.path(), "message", |_| {}).unwrap();
        assert_eq!(rows, 3);
    }

    #[test]
    fn parse_record_plain() {
        assert_eq!(parse_record("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_record_empty_fields() {
        assert_eq!(parse_record("a,,c"), vec!["a", "", "c"]);
        assert_eq!(parse_record(","), vec!["", ""]);
    }

    #[test]
    fn parse_record_quoted() {
        assert_eq!(parse_record("\"a,b\",c"), vec!["a,b", "c"]);
    }

    #[test]
    fn parse_record_interior_quote_is_literal() {
        assert_eq!(parse_record("it\"s,fine"), vec!["it\"s", "fine"]);
    }

    #[test]
    fn in_open_quote_parity() {
        assert!(in_open_quote("\"open"));
        assert!(!in_open_quote("\"closed\""));
        assert!(in_open_quote("\"escaped \"\" still open"));
    }
}
