//! Input abstraction for scan sources

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Unified input abstraction for scan sources
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input, opened lazily when the scan starts
    File(PathBuf),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from a reader
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Open the source as a line iterator
    ///
    /// A file that cannot be opened fails here, before a single line is
    /// read; read faults after this point surface through the iterator.
    pub(crate) fn open(self) -> Result<LineSource> {
        let reader: Box<dyn BufRead + Send> = match self {
            Input::Text(text) => Box::new(Cursor::new(text)),
            Input::File(path) => {
                let file = File::open(&path).map_err(|source| Error::Open {
                    path: path.clone(),
                    source,
                })?;
                Box::new(BufReader::new(file))
            }
            Input::Reader(reader) => Box::new(BufReader::new(reader)),
        };
        Ok(LineSource { reader })
    }
}

/// An opened source yielding lines with terminators stripped
pub(crate) struct LineSource {
    reader: Box<dyn BufRead + Send>,
}

impl Iterator for LineSource {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
