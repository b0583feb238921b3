// LogTriage - app/pipeline.rs
//
// Single-pass triage run: validate -> read -> parse -> count -> (filter) ->
// render. Every stage either completes or fails the run; the
// first error is returned to the caller untouched.

use crate::core::filter::by_level;
use crate::core::model::{LevelCount, LogRecord, LogStore};
use crate::core::parser::load;
use crate::core::stats::count_by_level;
use crate::platform::fs::{read_lines, validate_log_path};
use crate::ui::report::{render_counts, render_filtered};
use crate::util::constants;
use crate::util::error::{LogTriageError, Result};
use std::io::Write;
use std::path::PathBuf;

/// Inputs for one triage run.
#[derive(Debug, Clone)]
pub struct TriageRequest {
    /// Log file to read.
    pub path: PathBuf,
    /// Level to show detail lines for. `None` or an empty string prints
    /// counts only.
    pub level: Option<String>,
    /// Emit ANSI colour in the report.
    pub styled: bool,
    /// Largest file accepted, in bytes.
    pub max_file_size: u64,
}

impl TriageRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            level: None,
            styled: false,
            max_file_size: constants::DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// What a completed run computed.
#[derive(Debug, Clone)]
pub struct TriageOutcome {
    pub store: LogStore,
    pub counts: LevelCount,
    /// Records matching the requested level, `None` when no level was given.
    pub filtered: Option<Vec<LogRecord>>,
}

/// Run the full pipeline for `request`, writing the report to `out`.
pub fn run<W: Write>(request: &TriageRequest, out: &mut W) -> Result<TriageOutcome> {
    let path = validate_log_path(&request.path, request.max_file_size)?;
    let lines = read_lines(&path)?;
    let store = load(&lines)?;

    tracing::info!(
        path = %path.display(),
        records = store.len(),
        "Log file loaded"
    );

    let level = requested_level(request.level.as_deref());
    let analysis = analyse(&store, level);
    write_report(&analysis, level, request.styled, out).map_err(|e| LogTriageError::Io {
        path: PathBuf::from("<stdout>"),
        operation: "write report",
        source: e,
    })?;

    Ok(TriageOutcome {
        store,
        counts: analysis.counts,
        filtered: analysis.filtered,
    })
}

/// Counts and optional filter result for an already-loaded store.
pub struct Analysis {
    pub counts: LevelCount,
    pub filtered: Option<Vec<LogRecord>>,
}

/// An empty level argument counts as no level at all.
fn requested_level(level: Option<&str>) -> Option<&str> {
    level.filter(|level| !level.is_empty())
}

/// Aggregate and filter an already-loaded store. Both are pure and
/// independent of each other.
pub fn analyse(store: &LogStore, level: Option<&str>) -> Analysis {
    Analysis {
        counts: count_by_level(store),
        filtered: requested_level(level).map(|level| by_level(store, level)),
    }
}

fn write_report<W: Write>(
    analysis: &Analysis,
    level: Option<&str>,
    styled: bool,
    out: &mut W,
) -> std::io::Result<()> {
    out.write_all(render_counts(&analysis.counts, styled).as_bytes())?;

    if let (Some(level), Some(filtered)) = (level, &analysis.filtered) {
        out.write_all(b"\n")?;
        out.write_all(render_filtered(filtered, level, styled).as_bytes())?;
    }
    out.flush()
}
