pub mod lint;
pub mod why;

use clap::{Parser, Subcommand};
use g4_lint::{ColorMode, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "g4-lint")]
#[command(author, version, about = "Check ANTLR grammar files against naming and structure conventions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Grammar files or directories to check (default: all *.g4 files below the current directory)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    pub format: Format,

    /// Never fail the run, even when errors are found
    #[arg(short, long)]
    pub warn_only: bool,

    /// Also print warnings, and reports for files that only have warnings
    #[arg(short, long)]
    pub verbose: bool,

    /// Only check parser rules whose declaration is newly added in the pending git diff
    #[arg(short, long)]
    pub changed_only: bool,

    /// Disable a rule (can be repeated)
    #[arg(long, value_name = "RULE")]
    pub disable: Vec<String>,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn color_mode(&self) -> ColorMode {
        if self.color {
            ColorMode::Always
        } else if self.no_color {
            ColorMode::Never
        } else {
            ColorMode::Auto
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show detailed documentation for a rule
    Why {
        /// Rule name (e.g., "null-suffix")
        rule: Option<String>,

        /// List all available rules
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}
