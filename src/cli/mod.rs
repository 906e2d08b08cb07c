//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod formatters;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tt", version, about = "Track tray cutting orders and search them")]
pub struct Cli {
    /// Machine-readable JSON output (same as --format json)
    #[arg(long, global = true, env = "TT_ROBOT")]
    pub robot: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all logging
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Explicit config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.robot {
            return OutputFormat::Json;
        }
        self.format.unwrap_or_default()
    }
}
