// LogTriage - platform/fs.rs
//
// Input-file validation and line reading.
// The file handle is scoped to `read_lines`; parsing never sees the file.

use crate::util::error::{InputError, LogTriageError, ParseError};
use directories::BaseDirs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and hosts with no resolvable home, are
/// returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => {
            tracing::warn!("Could not determine home directory; leaving '~' unexpanded");
            path.to_path_buf()
        }
    }
}

/// Check that `path` names a readable, non-empty regular file no larger than
/// `max_size` bytes. Returns the home-expanded path.
pub fn validate_log_path(path: &Path, max_size: u64) -> Result<PathBuf, InputError> {
    let path = expand_home(path);

    let metadata = std::fs::metadata(&path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            InputError::NotFound { path: path.clone() }
        } else {
            InputError::Io {
                path: path.clone(),
                source: e,
            }
        }
    })?;

    if !metadata.is_file() {
        return Err(InputError::NotAFile { path });
    }
    if metadata.len() == 0 {
        return Err(InputError::Empty { path });
    }
    if metadata.len() > max_size {
        return Err(InputError::TooLarge {
            path,
            size: metadata.len(),
            max_size,
        });
    }

    tracing::debug!(path = %path.display(), size = metadata.len(), "Input file validated");
    Ok(path)
}

/// Read every line of `path` as UTF-8, without line terminators.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The file is closed before
/// this returns, on success or failure.
pub fn read_lines(path: &Path) -> Result<Vec<String>, LogTriageError> {
    let io_err = |operation: &'static str| {
        move |e: io::Error| LogTriageError::Io {
            path: path.to_path_buf(),
            operation,
            source: e,
        }
    };

    let bytes = {
        let file = std::fs::File::open(path).map_err(io_err("open"))?;
        let mut reader = io::BufReader::new(file);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(io_err("read"))?;
        bytes
    };

    let content = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        // Only the valid prefix is needed to locate the bad line.
        let prefix = std::str::from_utf8(valid).unwrap_or_default();
        ParseError::InvalidEncoding {
            file: path.to_path_buf(),
            line_number: line_number_at_end(prefix),
        }
    })?;

    let lines = split_lines(&content);
    tracing::debug!(path = %path.display(), lines = lines.len(), "File read");
    Ok(lines)
}

/// Split on universal line endings. A trailing terminator does not produce
/// an extra empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

/// 1-based number of the line that continues past the end of `prefix`.
fn line_number_at_end(prefix: &str) -> u64 {
    let complete = split_lines(prefix).len() as u64;
    if prefix.is_empty() || prefix.ends_with(['\n', '\r']) {
        complete + 1
    } else {
        complete
    }
}
