//! JSON report formatter.
//!
//! Formats audit findings as machine-readable JSON for tooling integration.

use serde::Serialize;
use std::io::Write;

use super::{AuditReport, Finding, ReportFormatter};

/// Formats audit output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    findings: Vec<&'a Finding>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    issues: usize,
    warnings: usize,
    info: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let findings: Vec<&Finding> = report
            .issues()
            .iter()
            .chain(report.warnings())
            .chain(report.info())
            .collect();

        let output = JsonOutput {
            summary: JsonSummary {
                total: findings.len(),
                issues: report.issues().len(),
                warnings: report.warnings().len(),
                info: report.info().len(),
            },
            findings,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
