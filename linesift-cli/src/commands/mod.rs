//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod scan;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a text file for matching lines and write numbered part files
    Scan(scan::ScanArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Scan(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
