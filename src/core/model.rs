// LogTriage - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use std::collections::HashMap;

// =============================================================================
// Log Record (output of parsing one line)
// =============================================================================

/// A single parsed log line.
///
/// Date and time are opaque tokens; they are never parsed into calendar
/// types. The level is kept exactly as written in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// 1-based position of the line in its source.
    pub line_number: u64,

    /// First whitespace-delimited token.
    pub date: String,

    /// Second whitespace-delimited token.
    pub time: String,

    /// Third token, case preserved.
    pub level: String,

    /// Everything after the level, internal whitespace included.
    pub message: String,
}

// =============================================================================
// Log Store
// =============================================================================

/// Ordered, immutable sequence of records produced by one load.
///
/// Only `core::parser::load` constructs a store, so every record in it
/// came from a well-formed line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogStore {
    records: Vec<LogRecord>,
}

impl LogStore {
    pub(crate) fn from_records(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    /// All records in file order.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a LogStore {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =============================================================================
// Level Count
// =============================================================================

/// Occurrence count per distinct level token.
///
/// Keys are case-sensitive and never map to zero. Iteration follows the order
/// in which each level was first seen, which gives the report a stable layout;
/// equality ignores that order.
#[derive(Debug, Clone, Default)]
pub struct LevelCount {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl LevelCount {
    /// Record one more occurrence of `level`.
    pub(crate) fn increment(&mut self, level: &str) {
        match self.index.get(level) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(level.to_string(), self.entries.len());
                self.entries.push((level.to_string(), 1));
            }
        }
    }

    /// Count for an exact level token, `None` if it was never seen.
    pub fn get(&self, level: &str) -> Option<usize> {
        self.index.get(level).map(|&slot| self.entries[slot].1)
    }

    /// `(level, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(level, count)| (level.as_str(), *count))
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of records counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl PartialEq for LevelCount {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(level, count)| other.get(level) == Some(count))
    }
}

impl Eq for LevelCount {}
