//! Chunked line filtering
//!
//! A single synchronous pass over a line source: matching lines are
//! trimmed and buffered, full buffers are flushed through the sink as
//! numbered chunks, and whatever remains after the source is exhausted is
//! flushed as a final partial chunk.

use crate::config::FilterConfig;
use crate::error::{Error, Result};
use crate::input::Input;
use crate::matcher::LineMatcher;
use std::io;
use std::mem;

/// A bounded batch of matched lines destined for one output unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based ordinal of this chunk in emission order
    pub part: u32,
    /// Matched lines in scan order, trimmed of surrounding whitespace
    pub lines: Vec<String>,
}

/// Aggregate counts for one scan invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// All lines read, matching or not
    pub lines_scanned: u64,
    /// Matching lines found (the sum of emitted chunk lengths on success)
    pub matches_found: u64,
    /// Chunks emitted through the sink
    pub parts_emitted: u32,
}

/// Receives each completed chunk, in emission order
pub trait ChunkSink {
    /// Persist one chunk; a failure aborts the scan
    fn emit(&mut self, chunk: &Chunk) -> io::Result<()>;
}

/// Sink that collects chunks in memory
#[derive(Debug, Default)]
pub struct VecSink {
    /// Chunks received so far, in emission order
    pub chunks: Vec<Chunk>,
}

impl VecSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChunkSink for VecSink {
    fn emit(&mut self, chunk: &Chunk) -> io::Result<()> {
        self.chunks.push(chunk.clone());
        Ok(())
    }
}

/// Single-pass chunked filter over an ordered line source
pub struct ChunkedLineFilter {
    config: FilterConfig,
}

impl ChunkedLineFilter {
    /// Create a filter with the default configuration
    pub fn new() -> Self {
        Self::with_config(FilterConfig::default()).expect("default config is valid")
    }

    /// Create a filter with a custom configuration
    pub fn with_config(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Scan `input`, emitting full chunks through `sink` as the threshold
    /// is reached and a final partial chunk once the source is exhausted
    ///
    /// Lines are matched and stored in trimmed form. On a mid-read fault
    /// the scan stops, matches buffered at that moment are dropped, and
    /// the counts accumulated so far ride on the returned error.
    pub fn scan(
        &self,
        input: Input,
        matcher: &dyn LineMatcher,
        sink: &mut dyn ChunkSink,
    ) -> Result<ScanReport> {
        let source = input.open()?;

        let mut report = ScanReport::default();
        let mut buffer: Vec<String> = Vec::new();
        let mut next_part: u32 = 1;

        for line in source {
            let line = line.map_err(|source| Error::Read {
                partial: report,
                source,
            })?;
            report.lines_scanned += 1;

            let trimmed = line.trim();
            if matcher.is_match(trimmed) {
                buffer.push(trimmed.to_string());
                report.matches_found += 1;

                if buffer.len() >= self.config.max_lines_per_part {
                    flush(&mut buffer, &mut next_part, &mut report, sink)?;
                }
            }
        }

        // Final flush for the remainder, under the next unused part index.
        if !buffer.is_empty() {
            flush(&mut buffer, &mut next_part, &mut report, sink)?;
        }

        Ok(report)
    }
}

impl Default for ChunkedLineFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn flush(
    buffer: &mut Vec<String>,
    next_part: &mut u32,
    report: &mut ScanReport,
    sink: &mut dyn ChunkSink,
) -> Result<()> {
    let chunk = Chunk {
        part: *next_part,
        lines: mem::take(buffer),
    };
    log::debug!("flushing part {} ({} lines)", chunk.part, chunk.lines.len());

    sink.emit(&chunk).map_err(|source| Error::Write {
        part: chunk.part,
        source,
    })?;

    *next_part += 1;
    report.parts_emitted += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::SubstringMatcher;

    fn scan_text(
        text: &str,
        target: &str,
        max_lines_per_part: usize,
    ) -> (ScanReport, Vec<Chunk>) {
        let filter = ChunkedLineFilter::with_config(
            FilterConfig::builder()
                .max_lines_per_part(max_lines_per_part)
                .build()
                .unwrap(),
        )
        .unwrap();
        let matcher = SubstringMatcher::new(target);
        let mut sink = VecSink::new();

        let report = filter
            .scan(Input::from_text(text), &matcher, &mut sink)
            .unwrap();
        (report, sink.chunks)
    }

    #[test]
    fn test_exact_chunking_scenario() {
        // 45 lines; lines 1, 21 and 41 contain the target, threshold 2.
        let mut lines = Vec::new();
        for i in 1..=45 {
            if i == 1 || i == 21 || i == 41 {
                lines.push(format!("line {i} with X marker"));
            } else {
                lines.push(format!("line {i}"));
            }
        }
        let text = lines.join("\n");

        let (report, chunks) = scan_text(&text, "X", 2);

        assert_eq!(report.lines_scanned, 45);
        assert_eq!(report.matches_found, 3);
        assert_eq!(report.parts_emitted, 2);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].part, 1);
        assert_eq!(
            chunks[0].lines,
            ["line 1 with X marker", "line 21 with X marker"]
        );
        assert_eq!(chunks[1].part, 2);
        assert_eq!(chunks[1].lines, ["line 41 with X marker"]);
    }

    #[test]
    fn test_no_matches_emits_no_chunks() {
        let (report, chunks) = scan_text("alpha\nbeta\ngamma\n", ".pdf", 10);

        assert_eq!(report.lines_scanned, 3);
        assert_eq!(report.matches_found, 0);
        assert_eq!(report.parts_emitted, 0);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_matched_lines_are_trimmed() {
        let (_, chunks) = scan_text("  foo.pdf  \nbar.txt\n", ".pdf", 10);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].lines, ["foo.pdf"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let (report, chunks) = scan_text("report.pdf\nREADME.md\n", ".PDF", 10);

        assert_eq!(report.matches_found, 1);
        assert_eq!(chunks[0].lines, ["report.pdf"]);
    }

    #[test]
    fn test_single_partial_chunk_gets_part_one() {
        let (report, chunks) = scan_text("a.pdf\nb.pdf\n", ".pdf", 5);

        assert_eq!(report.parts_emitted, 1);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].part, 1);
        assert_eq!(chunks[0].lines.len(), 2);
    }

    #[test]
    fn test_exact_multiple_of_threshold_has_no_empty_final_chunk() {
        let (report, chunks) = scan_text("a.pdf\nb.pdf\nc.pdf\nd.pdf\n", ".pdf", 2);

        assert_eq!(report.matches_found, 4);
        assert_eq!(report.parts_emitted, 2);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.lines.len() == 2));
    }

    #[test]
    fn test_part_indices_are_sequential() {
        let text = (0..10)
            .map(|i| format!("match {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let (_, chunks) = scan_text(&text, "match", 3);

        let parts: Vec<u32> = chunks.iter().map(|c| c.part).collect();
        assert_eq!(parts, [1, 2, 3, 4]);
    }

    #[test]
    fn test_matches_equal_sum_of_chunk_lengths() {
        let text = (0..37)
            .map(|i| format!("entry {i}.log"))
            .collect::<Vec<_>>()
            .join("\n");
        let (report, chunks) = scan_text(&text, ".log", 5);

        let total: usize = chunks.iter().map(|c| c.lines.len()).sum();
        assert_eq!(report.matches_found, total as u64);
        assert!(report.matches_found <= report.lines_scanned);
    }

    #[test]
    fn test_missing_input_scans_nothing() {
        let filter = ChunkedLineFilter::new();
        let matcher = SubstringMatcher::new(".pdf");
        let mut sink = VecSink::new();

        let result = filter.scan(
            Input::from_file("/nonexistent/data.txt"),
            &matcher,
            &mut sink,
        );

        assert!(matches!(result, Err(Error::Open { .. })));
        assert!(sink.chunks.is_empty());
    }

    #[test]
    fn test_invalid_threshold_is_rejected_before_io() {
        let result = FilterConfig::builder().max_lines_per_part(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    /// Reader that fails after yielding a prefix of valid lines
    struct FaultyReader {
        data: io::Cursor<Vec<u8>>,
        fail_after: usize,
        read_so_far: usize,
    }

    impl io::Read for FaultyReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.read_so_far >= self.fail_after {
                return Err(io::Error::new(io::ErrorKind::Other, "injected fault"));
            }
            let remaining = self.fail_after - self.read_so_far;
            let cap = remaining.min(buf.len());
            let n = io::Read::read(&mut self.data, &mut buf[..cap])?;
            if n == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "injected fault"));
            }
            self.read_so_far += n;
            Ok(n)
        }
    }

    #[test]
    fn test_mid_read_fault_reports_partial_counts_and_drops_buffer() {
        // Two full lines survive, then the reader faults. Threshold is high
        // enough that the match stays buffered, so it must not be flushed.
        let data = b"first.pdf\nsecond\nthird.pdf\n".to_vec();
        let reader = FaultyReader {
            data: io::Cursor::new(data),
            fail_after: 17, // cuts off inside the third line
            read_so_far: 0,
        };

        let filter = ChunkedLineFilter::new();
        let matcher = SubstringMatcher::new(".pdf");
        let mut sink = VecSink::new();

        let result = filter.scan(Input::from_reader(reader), &matcher, &mut sink);

        match result {
            Err(Error::Read { partial, .. }) => {
                assert_eq!(partial.lines_scanned, 2);
                assert_eq!(partial.matches_found, 1);
                assert_eq!(partial.parts_emitted, 0);
            }
            other => panic!("expected Error::Read, got {other:?}"),
        }
        assert!(sink.chunks.is_empty(), "buffered matches must not flush on fault");
    }

    /// Sink that refuses every chunk
    struct FailingSink;

    impl ChunkSink for FailingSink {
        fn emit(&mut self, _chunk: &Chunk) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "sink unavailable"))
        }
    }

    #[test]
    fn test_sink_failure_aborts_with_part_number() {
        let filter = ChunkedLineFilter::with_config(
            FilterConfig::builder().max_lines_per_part(1).build().unwrap(),
        )
        .unwrap();
        let matcher = SubstringMatcher::new(".pdf");
        let mut sink = FailingSink;

        let result = filter.scan(Input::from_text("a.pdf\nb.pdf\n"), &matcher, &mut sink);

        match result {
            Err(Error::Write { part, .. }) => assert_eq!(part, 1),
            other => panic!("expected Error::Write, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_a_clean_no_op() {
        let (report, chunks) = scan_text("", "x", 3);

        assert_eq!(report, ScanReport::default());
        assert!(chunks.is_empty());
    }
}
