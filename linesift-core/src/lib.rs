//! Core engine for linesift
//!
//! Scans an ordered source of text lines for case-insensitive substring
//! matches and partitions the matching lines into bounded chunks, emitting
//! each chunk through a caller-supplied sink. The engine performs no file
//! writing itself; persisting chunks is the sink's job.

pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod matcher;

pub use config::FilterConfig;
pub use error::{Error, Result};
pub use filter::{Chunk, ChunkSink, ChunkedLineFilter, ScanReport, VecSink};
pub use input::Input;
pub use matcher::{LineMatcher, SubstringMatcher};
