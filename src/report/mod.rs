//! Report model and output formatters.
//!
//! Findings accumulate into an [`AuditReport`] during the audit and are
//! rendered once at the end, either for terminal display
//! ([`HumanFormatter`]) or as machine-readable JSON ([`JsonFormatter`]).

pub mod finding;
pub mod human;
pub mod json;

pub use finding::{AuditReport, Category, Finding};
pub use human::HumanFormatter;
pub use json::JsonFormatter;

use std::io::Write;
use std::str::FromStr;

/// Output format for audit reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Grouped terminal output with a summary and remediation steps.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown report format: {}", s)),
        }
    }
}

/// Trait for rendering a finished report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()>;
}
