//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it for scanning:");
        println!(
            "   linesift scan -i input.txt -t .pdf -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        r#"# linesift configuration

[scan]
# Matches collected before a part file is written
max_lines_per_part = 20000

[output]
# Directory part files are written into
directory = "."

# strftime pattern for the filename timestamp
timestamp_format = "%Y%m%d_%H%M%S"
"#
        .to_string()
    }
}
