//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::report::ReportFormat;

/// axaudit - Structural diagnostics for Avalonia desktop projects.
#[derive(Debug, Parser)]
#[command(name = "axaudit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the Avalonia project root (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Report output format
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub format: ReportFormat,

    /// Replace the built-in rule catalog with a JSON file
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print only the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
