// LogTriage - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant keeps the data needed to
// explain the failure, and `source()` exposes the underlying cause.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogTriage operations.
/// Errors are categorised by the stage of the pipeline that produced them.
#[derive(Debug)]
pub enum LogTriageError {
    /// The input path was rejected before any content was read.
    Input(InputError),

    /// The log content could not be turned into records.
    Parse(ParseError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogTriageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "Input error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogTriageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

/// Errors raised while validating and opening the input log file.
#[derive(Debug)]
pub enum InputError {
    /// The path does not exist.
    NotFound { path: PathBuf },

    /// The path exists but is not a regular file.
    NotAFile { path: PathBuf },

    /// The file contains zero bytes.
    Empty { path: PathBuf },

    /// The file exceeds the configured size limit.
    TooLarge { path: PathBuf, size: u64, max_size: u64 },

    /// Metadata or open failure other than not-found.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "'{}' does not exist", path.display())
            }
            Self::NotAFile { path } => {
                write!(f, "'{}' is not a file", path.display())
            }
            Self::Empty { path } => write!(f, "'{}' is empty", path.display()),
            Self::TooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, exceeds maximum of {max_size} bytes. \
                 Raise [input] max_file_size_bytes in config to load it.",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "cannot access '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<InputError> for LogTriageError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors related to turning log lines into records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line lacks the three space boundaries that separate date, time,
    /// level and message. Carries the offending line verbatim.
    MalformedLine { line_number: u64, line: String },

    /// A line in the file is not valid UTF-8.
    InvalidEncoding { file: PathBuf, line_number: u64 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line_number, line } => write!(
                f,
                "line {line_number}: expected '<date> <time> <level> <message>', got '{line}'"
            ),
            Self::InvalidEncoding { file, line_number } => write!(
                f,
                "'{}' line {line_number}: invalid UTF-8 encoding",
                file.display()
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for LogTriageError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

/// Convenience type alias for LogTriage results.
pub type Result<T> = std::result::Result<T, LogTriageError>;
