// LogTriage - core/stats.rs
//
// Per-level aggregation over a loaded store.

use crate::core::model::{LevelCount, LogStore};

/// Count records by their exact level token.
///
/// No case folding happens here: `info` and `INFO` are separate keys.
pub fn count_by_level(store: &LogStore) -> LevelCount {
    let mut counts = LevelCount::default();
    for record in store {
        counts.increment(&record.level);
    }

    tracing::debug!(
        levels = counts.len(),
        records = counts.total(),
        "Level counts computed"
    );
    counts
}
