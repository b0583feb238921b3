// LogTriage - tests/e2e_pipeline.rs
//
// End-to-end tests for the triage pipeline.
//
// These tests exercise the real filesystem, the real line reader, and the
// compiled binary: no mocks, no stubs. They cover the full path from a raw
// log file on disk to the rendered report and the process exit status.

use logtriage::app::pipeline::{run, TriageRequest};
use logtriage::core::filter::by_level;
use logtriage::core::parser::load;
use logtriage::core::stats::count_by_level;
use logtriage::util::error::{InputError, LogTriageError, ParseError};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the compiled binary with exactly `args`.
fn run_cli_raw(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_logtriage"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn logtriage binary")
}

/// Run the compiled binary with colour disabled and no user config.
fn run_cli(args: &[&str]) -> std::process::Output {
    let no_config = std::env::temp_dir().join("logtriage-e2e-no-such-config.toml");
    let mut full = vec!["--color", "never", "--config", no_config.to_str().unwrap()];
    full.extend_from_slice(args);
    run_cli_raw(&full)
}

/// Write a config file that sets only `[display] color`.
fn write_color_config(dir: &std::path::Path, color: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, format!("[display]\ncolor = \"{color}\"\n")).unwrap();
    path
}

// =============================================================================
// Pipeline E2E
// =============================================================================

/// The sample fixture parses completely and counts match its content.
#[test]
fn e2e_fixture_counts() {
    let mut out: Vec<u8> = Vec::new();
    let outcome = run(&TriageRequest::new(fixture("service_sample.log")), &mut out).unwrap();

    assert_eq!(outcome.store.len(), 10);
    assert_eq!(outcome.counts.get("INFO"), Some(4));
    assert_eq!(outcome.counts.get("DEBUG"), Some(3));
    assert_eq!(outcome.counts.get("ERROR"), Some(2));
    assert_eq!(outcome.counts.get("WARNING"), Some(1));
    assert_eq!(outcome.counts.total(), outcome.store.len());

    let report = String::from_utf8(out).unwrap();
    let first_rows: Vec<_> = ["INFO", "DEBUG", "ERROR", "WARNING"]
        .iter()
        .map(|level| report.find(level).unwrap())
        .collect();
    assert!(
        first_rows.windows(2).all(|w| w[0] < w[1]),
        "rows should follow first-seen order:\n{report}"
    );
}

/// Filtering the fixture by a lower-case level returns the matching lines.
#[test]
fn e2e_fixture_filter_details() {
    let mut request = TriageRequest::new(fixture("service_sample.log"));
    request.level = Some("error".to_string());
    let mut out: Vec<u8> = Vec::new();

    run(&request, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    let details: Vec<_> = report
        .lines()
        .skip_while(|l| !l.starts_with("Log details"))
        .collect();
    assert_eq!(
        details,
        vec![
            "Log details for level 'ERROR':",
            "2024-01-22 09:00:45 - Database connection failed.",
            "2024-01-22 11:30:15 - Backup process failed.",
        ]
    );
}

/// Scenario A: counts and case-insensitive, order-preserving filter.
#[test]
fn e2e_scenario_a() {
    let store = load([
        "2024-01-01 10:00:00 INFO Service started",
        "2024-01-01 10:00:05 ERROR Connection failed",
        "2024-01-01 10:00:06 INFO Retrying",
    ])
    .unwrap();

    let counts = count_by_level(&store);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get("INFO"), Some(2));
    assert_eq!(counts.get("ERROR"), Some(1));

    let filtered = by_level(&store, "info");
    assert_eq!(
        filtered,
        vec![store.records()[0].clone(), store.records()[2].clone()]
    );
    assert_eq!(filtered, by_level(&store, "INFO"));
}

/// Scenario B: no lines gives an empty store, no count rows, no matches.
#[test]
fn e2e_scenario_b_empty_input() {
    let store = load(Vec::<String>::new()).unwrap();
    assert!(store.is_empty());
    assert!(count_by_level(&store).is_empty());
    assert!(by_level(&store, "ERROR").is_empty());
}

/// Scenario C: a line with too few tokens fails the whole load.
#[test]
fn e2e_scenario_c_malformed_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.log");
    fs::write(
        &path,
        "2024-01-01 10:00:00 INFO Service started\nonly two tokens\n",
    )
    .unwrap();

    let err = run(&TriageRequest::new(&path), &mut Vec::<u8>::new()).unwrap_err();
    match err {
        LogTriageError::Parse(ParseError::MalformedLine { line_number, line }) => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "only two tokens");
        }
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}

/// A zero-byte file is rejected before parsing.
#[test]
fn e2e_empty_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.log");
    fs::write(&path, "").unwrap();

    let err = run(&TriageRequest::new(&path), &mut Vec::<u8>::new()).unwrap_err();
    assert!(
        matches!(err, LogTriageError::Input(InputError::Empty { .. })),
        "expected Empty, got {err:?}"
    );
}

/// Windows line endings are stripped before parsing.
#[test]
fn e2e_crlf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.log");
    fs::write(&path, "d1 t1 INFO first one\r\nd2 t2 INFO second\r\n").unwrap();

    let outcome = run(&TriageRequest::new(&path), &mut Vec::<u8>::new()).unwrap();
    assert_eq!(outcome.store.records()[0].message, "first one");
    assert_eq!(outcome.store.records()[1].message, "second");
}

/// A bare carriage return ends a line just like `\n`.
#[test]
fn e2e_lone_carriage_return_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cr.log");
    fs::write(&path, "d t INFO one\rd t ERROR two\n").unwrap();

    let outcome = run(&TriageRequest::new(&path), &mut Vec::<u8>::new()).unwrap();
    assert_eq!(outcome.store.len(), 2);
    assert_eq!(outcome.counts.get("INFO"), Some(1));
    assert_eq!(outcome.counts.get("ERROR"), Some(1));
    assert_eq!(outcome.store.records()[1].line_number, 2);
}

// =============================================================================
// Binary E2E
// =============================================================================

/// Counts only: exit zero, table on stdout, nothing on stderr.
#[test]
fn e2e_cli_counts_only() {
    let output = run_cli(&[fixture("service_sample.log").to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Log Level"));
    assert!(stdout.contains("WARNING"));
    assert!(!stdout.contains("Log details"));
    assert!(!stdout.contains('\u{1b}'));
}

/// Level argument with no match still exits zero.
#[test]
fn e2e_cli_no_matches_is_success() {
    let output = run_cli(&[fixture("service_sample.log").to_str().unwrap(), "trace"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No logs for level 'TRACE'"));
}

/// Missing file: user-facing error line and non-zero exit.
#[test]
fn e2e_cli_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.log");
    let output = run_cli(&[missing.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

/// Malformed content: non-zero exit naming the offending line.
#[test]
fn e2e_cli_malformed_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.log");
    fs::write(&path, "only two tokens\n").unwrap();

    let output = run_cli(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("only two tokens"), "stderr: {stderr}");
}

/// An empty level argument means no level: counts only.
#[test]
fn e2e_cli_empty_level_prints_counts_only() {
    let output = run_cli(&[fixture("service_sample.log").to_str().unwrap(), ""]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Log Level"));
    assert!(!stdout.contains("Log details"));
    assert!(!stdout.contains("No logs for level"));
}

/// Config `color = "always"` styles output even when stdout is a pipe.
#[test]
fn e2e_cli_config_color_always() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_color_config(dir.path(), "always");

    let output = run_cli_raw(&[
        "--config",
        config.to_str().unwrap(),
        fixture("service_sample.log").to_str().unwrap(),
        "error",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains('\u{1b}'), "stdout: {stdout:?}");
}

/// `--color never` wins over the config file.
#[test]
fn e2e_cli_color_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_color_config(dir.path(), "always");

    let output = run_cli_raw(&[
        "--color",
        "never",
        "--config",
        config.to_str().unwrap(),
        fixture("service_sample.log").to_str().unwrap(),
        "error",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains('\u{1b}'), "stdout: {stdout:?}");
    assert!(stdout.contains("Database connection failed."));
}
