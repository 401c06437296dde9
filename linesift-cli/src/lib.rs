//! linesift CLI library
//!
//! This library provides the command-line interface around the
//! linesift-core chunked line filter: argument parsing, configuration
//! files, part-file writing, and progress reporting.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
