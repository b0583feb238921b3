// LogTriage - core/parser.rs
//
// Line tokenisation into the fixed `<date> <time> <level> <message>` schema.
// Core layer: accepts already-read lines, never touches the filesystem.

use crate::core::model::{LogRecord, LogStore};
use crate::util::constants::{DEBUG_MAX_LINE_PREVIEW, FIELD_SEPARATOR, LINE_FIELD_COUNT};
use crate::util::error::ParseError;

/// Parse one stripped line into a record.
///
/// This is a bounded split: only the first three separators delimit fields,
/// every later space belongs to the message verbatim. No field is trimmed or
/// case-folded.
pub fn parse_line(line: &str, line_number: u64) -> Result<LogRecord, ParseError> {
    let mut parts = line.splitn(LINE_FIELD_COUNT, FIELD_SEPARATOR);

    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(date), Some(time), Some(level), Some(message)) => Ok(LogRecord {
            line_number,
            date: date.to_string(),
            time: time.to_string(),
            level: level.to_string(),
            message: message.to_string(),
        }),
        _ => Err(ParseError::MalformedLine {
            line_number,
            line: line.to_string(),
        }),
    }
}

/// Parse every line, in order, into a `LogStore`.
///
/// Each line is trimmed of surrounding whitespace first. The first malformed
/// line aborts the whole load; no partial store is returned. An empty input
/// yields an empty store.
pub fn load<I, S>(lines: I) -> Result<LogStore, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line_number = (idx as u64) + 1;
        let line = line.as_ref().trim();

        match parse_line(line, line_number) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::debug!(
                    line_number,
                    preview = %preview(line),
                    "Malformed line; aborting load"
                );
                return Err(e);
            }
        }
    }

    tracing::debug!(records = records.len(), "Load complete");
    Ok(LogStore::from_records(records))
}

/// Truncated copy of a line for debug output.
fn preview(line: &str) -> &str {
    match line.char_indices().nth(DEBUG_MAX_LINE_PREVIEW) {
        Some((cut, _)) => &line[..cut],
        None => line,
    }
}
