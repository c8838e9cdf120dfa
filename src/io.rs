// File-level scanning helpers.
//
// The whole file is read into memory before any output is produced, so a
// read failure never leaves a partial report behind. The buffer is dropped
// when the helper returns.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be opened or read (missing, permission denied, I/O fault).
    #[error("{}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The report could not be written to its sink.
    #[error("write error: {0}")]
    Report(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Summary returned by the `check_*` helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Size of the scanned file in bytes.
    pub bytes_scanned: u64,
    /// Number of matches reported.
    pub matches: usize,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read `path` fully into memory as raw bytes.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ScanError> {
    let data = fs::read(path).map_err(|source| ScanError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

// ---------------------------------------------------------------------------
// check_* helpers
// ---------------------------------------------------------------------------

/// Load `path` and report its non-ASCII bytes to `out`.
///
/// Only the first offending byte is reported unless `all` is set.
pub fn check_ascii_file<W: Write>(
    path: &Path,
    out: &mut W,
    all: bool,
) -> Result<ScanSummary, ScanError> {
    let data = read_file(path)?;
    let matches = report::report_non_ascii(out, &data, all)?;
    out.flush()?;
    log::debug!("ascii scan of {}: {matches} match(es)", path.display());
    Ok(ScanSummary {
        bytes_scanned: data.len() as u64,
        matches,
    })
}

/// Load `path` and report every suspicious punctuation pattern to `out`.
pub fn check_suspicious_file<W: Write>(path: &Path, out: &mut W) -> Result<ScanSummary, ScanError> {
    let data = read_file(path)?;
    let matches = report::report_suspicious(out, &data)?;
    out.flush()?;
    log::debug!("suspicious scan of {}: {matches} match(es)", path.display());
    Ok(ScanSummary {
        bytes_scanned: data.len() as u64,
        matches,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
