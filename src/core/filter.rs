// LogTriage - core/filter.rs
//
// Level filter over a loaded store.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{LogRecord, LogStore};

/// Normalised form of a requested level. Both the request and each record's
/// level are upper-cased before comparison.
pub fn normalise_level(level: &str) -> String {
    level.to_uppercase()
}

/// Indices of records whose level matches `level`, case-insensitively.
///
/// Returning indices avoids copying records when the caller only needs a view.
pub fn apply_level_filter(records: &[LogRecord], level: &str) -> Vec<usize> {
    let wanted = normalise_level(level);

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| normalise_level(&record.level) == wanted)
        .map(|(idx, _)| idx)
        .collect()
}

/// Records whose level matches `level`, in file order.
///
/// No match is an empty vector, not an error.
pub fn by_level(store: &LogStore, level: &str) -> Vec<LogRecord> {
    let records = store.records();
    let matched: Vec<LogRecord> = apply_level_filter(records, level)
        .into_iter()
        .map(|idx| records[idx].clone())
        .collect();

    tracing::debug!(
        level = %normalise_level(level),
        matched = matched.len(),
        total = records.len(),
        "Level filter applied"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::load;

    fn scenario_a() -> LogStore {
        load([
            "2024-01-01 10:00:00 INFO Service started",
            "2024-01-01 10:00:05 ERROR Connection failed",
            "2024-01-01 10:00:06 INFO Retrying",
        ])
        .unwrap()
    }

    #[test]
    fn test_filter_returns_matches_in_order() {
        let store = scenario_a();
        let result = by_level(&store, "info");
        let messages: Vec<_> = result.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["Service started", "Retrying"]);
        assert_eq!(result[0], store.records()[0]);
        assert_eq!(result[1], store.records()[2]);
    }

    #[test]
    fn test_filter_is_case_insensitive_both_ways() {
        let store = load(["d t error a", "d t ERROR b", "d t Error c", "d t INFO d"]).unwrap();
        let lower = by_level(&store, "error");
        let upper = by_level(&store, "ERROR");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 3);
    }

    #[test]
    fn test_no_match_is_empty() {
        let store = scenario_a();
        assert!(by_level(&store, "CRITICAL").is_empty());
    }

    #[test]
    fn test_filter_on_empty_store() {
        let store = load(Vec::<&str>::new()).unwrap();
        assert!(by_level(&store, "INFO").is_empty());
    }

    #[test]
    fn test_indices_view() {
        let store = scenario_a();
        assert_eq!(apply_level_filter(store.records(), "Error"), vec![1]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let store = scenario_a();
        assert_eq!(by_level(&store, "INFO"), by_level(&store, "INFO"));
    }
}
