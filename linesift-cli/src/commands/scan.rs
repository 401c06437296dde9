//! Scan command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::PartFileWriter;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use linesift_core::{
    Chunk, ChunkSink, ChunkedLineFilter, FilterConfig, Input, ScanReport, SubstringMatcher,
};
use std::io;
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Input file to scan
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Substring to match, case-insensitive
    #[arg(short, long, value_name = "TEXT", required = true)]
    pub target: String,

    /// Matches collected per part file (overrides the config file)
    #[arg(short, long, value_name = "N")]
    pub max_lines: Option<usize>,

    /// Directory part files are written into (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Writes parts to disk and narrates each one to the progress reporter
struct ReportingSink<'a> {
    writer: &'a mut PartFileWriter,
    progress: &'a ProgressReporter,
}

impl ChunkSink for ReportingSink<'_> {
    fn emit(&mut self, chunk: &Chunk) -> io::Result<()> {
        self.writer.emit(chunk)?;
        self.progress.part_written(chunk.part, chunk.lines.len());
        Ok(())
    }
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        let config = self.load_config()?;
        let max_lines = self.max_lines.unwrap_or(config.scan.max_lines_per_part);
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output.directory));

        if !self.input.is_file() {
            return Err(CliError::FileNotFound(self.input.display().to_string()).into());
        }

        log::info!(
            "Scanning {} for \"{}\" ({} matches per part)",
            self.input.display(),
            self.target,
            max_lines
        );

        let filter = ChunkedLineFilter::with_config(
            FilterConfig::builder().max_lines_per_part(max_lines).build()?,
        )?;
        let matcher = SubstringMatcher::new(&self.target);

        let mut writer =
            PartFileWriter::new(&output_dir, &self.target, &config.output.timestamp_format)
                .with_context(|| {
                    format!("Failed to prepare output directory {}", output_dir.display())
                })?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(&self.input);

        let scan_result = {
            let mut sink = ReportingSink {
                writer: &mut writer,
                progress: &progress,
            };
            filter.scan(Input::from_file(&self.input), &matcher, &mut sink)
        };
        progress.finish();

        let report = scan_result
            .with_context(|| format!("Failed to scan {}", self.input.display()))?;

        self.print_summary(&report, writer.paths());
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }

    /// Load the config file if one was given, otherwise the defaults
    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::load(path),
            None => Ok(CliConfig::default()),
        }
    }

    /// Print the human-readable result summary
    fn print_summary(&self, report: &ScanReport, paths: &[PathBuf]) {
        if report.matches_found == 0 {
            println!("No matches found for \"{}\"", self.target);
            println!("Total lines processed: {}", report.lines_scanned);
            return;
        }

        for path in paths {
            println!("Created file: {}", path.display());
        }
        println!("Total lines processed: {}", report.lines_scanned);
        println!("Total matches found: {}", report.matches_found);
        println!("Part files written: {}", report.parts_emitted);
    }
}
