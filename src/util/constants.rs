// LogTriage - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTriage";

/// Application identifier used for config directories.
pub const APP_ID: &str = "LogTriage";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input limits
// =============================================================================

/// Default upper bound on the size of a log file loaded into memory.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 512 * 1024 * 1024; // 512 MB

/// Smallest user-configurable file size limit.
pub const MIN_MAX_FILE_SIZE: u64 = 1;

/// Hard upper bound on the file size limit (whole file is held in memory).
pub const ABSOLUTE_MAX_FILE_SIZE: u64 = 4 * 1024 * 1024 * 1024; // 4 GB

// =============================================================================
// Line schema
// =============================================================================

/// Separator between the date, time, level and message fields.
pub const FIELD_SEPARATOR: char = ' ';

/// Number of parts a line is split into: date, time, level, message.
pub const LINE_FIELD_COUNT: usize = 4;

// =============================================================================
// Presentation
// =============================================================================

/// Header of the level column in the counts table.
pub const HEADER_LEVEL: &str = "Log Level";

/// Header of the count column in the counts table.
pub const HEADER_COUNT: &str = "Count";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Diagnostics stay quiet unless asked for, since stdout
/// carries the report.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
