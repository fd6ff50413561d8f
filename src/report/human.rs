//! Human-readable report formatter.
//!
//! Prints the three finding groups in generation order with running counts,
//! a summary line, and a remediation checklist when issues were found.

use std::io::Write;

use super::{AuditReport, Finding, ReportFormatter};
use crate::ui::AuditTheme;

/// Fixed remediation steps shown whenever at least one issue exists.
const RECOMMENDED_ACTIONS: [&str; 4] = [
    "Fix all critical issues first",
    "Address warnings that might affect functionality",
    "Clean and rebuild the project",
    "Test application startup",
];

/// Formats audit output for terminal display.
pub struct HumanFormatter {
    theme: AuditTheme,
    /// When set, only the summary line is printed.
    quiet: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(theme: AuditTheme, quiet: bool) -> Self {
        Self { theme, quiet }
    }

    fn write_group<W: Write>(
        &self,
        writer: &mut W,
        styled_header: String,
        findings: &[Finding],
    ) -> std::io::Result<()> {
        if findings.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{} ({}):", styled_header, findings.len())?;
        for (i, finding) in findings.iter().enumerate() {
            writeln!(
                writer,
                "   {} {}",
                self.theme.dim.apply_to(format!("{}.", i + 1)),
                finding.message
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        if !self.quiet {
            self.write_group(
                writer,
                self.theme.issue.apply_to("✗ ISSUES").to_string(),
                report.issues(),
            )?;
            self.write_group(
                writer,
                self.theme.warning.apply_to("⚠ WARNINGS").to_string(),
                report.warnings(),
            )?;
            self.write_group(
                writer,
                self.theme.info.apply_to("✓ INFO").to_string(),
                report.info(),
            )?;
        }

        writeln!(
            writer,
            "{} Issues: {} | Warnings: {} | Info: {}",
            self.theme.highlight.apply_to("Summary:"),
            report.issues().len(),
            report.warnings().len(),
            report.info().len()
        )?;

        if report.has_issues() && !self.quiet {
            writeln!(writer)?;
            writeln!(
                writer,
                "{}",
                self.theme.highlight.apply_to("Recommended actions:")
            )?;
            for (i, action) in RECOMMENDED_ACTIONS.iter().enumerate() {
                writeln!(
                    writer,
                    "   {} {}",
                    self.theme.dim.apply_to(format!("{}.", i + 1)),
                    action
                )?;
            }
        }

        Ok(())
    }
}
