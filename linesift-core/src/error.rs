//! Error types for scan operations

use crate::filter::ScanReport;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for scan operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration, rejected before any I/O
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The input could not be opened at all; nothing was scanned or emitted
    #[error("Input not found or unreadable: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed partway through the scan
    ///
    /// `partial` holds the counts accumulated up to the fault. Matches that
    /// were buffered but not yet flushed at that moment are dropped, not
    /// emitted.
    #[error(
        "Read failed after {} lines ({} matches so far)",
        partial.lines_scanned,
        partial.matches_found
    )]
    Read {
        partial: ScanReport,
        #[source]
        source: std::io::Error,
    },

    /// The sink could not persist a chunk; the scan aborts so the part
    /// sequence never contains a gap
    #[error("Failed to write part {part}")]
    Write {
        part: u32,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, Error>;
