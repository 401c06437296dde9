//! linesift command-line entry point

use clap::Parser;
use linesift_cli::commands::Commands;

/// Chunked, case-insensitive line filtering
#[derive(Debug, Parser)]
#[command(
    name = "linesift",
    version,
    about = "Scan a text file for case-insensitive substring matches and write matching lines to numbered part files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
