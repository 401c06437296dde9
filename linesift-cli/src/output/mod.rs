//! Part file writing

use chrono::Local;
use linesift_core::{Chunk, ChunkSink};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes each chunk as a numbered part file
///
/// File names follow `<stamp>_<target>_part<N>.txt`. The payload is a
/// bracketed, comma-separated list of double-quoted lines, e.g.
/// `["a.pdf","b.pdf"]`. Embedded quotes and commas are not escaped; the
/// format is kept byte-compatible with existing consumers.
pub struct PartFileWriter {
    directory: PathBuf,
    stem: String,
    paths: Vec<PathBuf>,
}

impl PartFileWriter {
    /// Create a writer rooted at `directory`, creating it if needed
    ///
    /// The timestamp is captured once here so every part of one run shares
    /// the same stamp.
    pub fn new(directory: &Path, target: &str, timestamp_format: &str) -> io::Result<Self> {
        fs::create_dir_all(directory)?;

        let stamp = Local::now().format(timestamp_format);
        let stem = format!("{}_{}", stamp, sanitize_target(target));

        Ok(Self {
            directory: directory.to_path_buf(),
            stem,
            paths: Vec::new(),
        })
    }

    /// Paths written so far, in part order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn part_path(&self, part: u32) -> PathBuf {
        self.directory.join(format!("{}_part{}.txt", self.stem, part))
    }
}

impl ChunkSink for PartFileWriter {
    fn emit(&mut self, chunk: &Chunk) -> io::Result<()> {
        let path = self.part_path(chunk.part);
        fs::write(&path, render_chunk(&chunk.lines))?;

        log::info!("wrote {} ({} lines)", path.display(), chunk.lines.len());
        self.paths.push(path);
        Ok(())
    }
}

/// Serialize lines as `["line1","line2",...]`, with no escaping
fn render_chunk(lines: &[String]) -> String {
    let quoted: Vec<String> = lines.iter().map(|line| format!("\"{line}\"")).collect();
    format!("[{}]", quoted.join(","))
}

/// Replace characters that cannot be embedded in a file name
fn sanitize_target(target: &str) -> String {
    target
        .chars()
        .map(|c| {
            if c.is_whitespace() || matches!(c, '/' | '\\' | ':' | '\0') {
                '_'
            } else {
                c
            }
        })
        .collect()
}
