//! Build artifact check: generated code and executable output.
//!
//! Presence signals only. Freshness against source timestamps is out of
//! scope.

use super::{AuditCheck, AuditContext};
use crate::report::AuditReport;

/// Surveys the `obj` and `bin` build-output folders.
pub struct ArtifactsCheck;

impl AuditCheck for ArtifactsCheck {
    fn id(&self) -> &'static str {
        "artifacts"
    }

    fn name(&self) -> &str {
        "Build Artifacts"
    }

    fn description(&self) -> &str {
        "Checks generated code and executable output"
    }

    fn run(&self, ctx: &AuditContext, report: &mut AuditReport) {
        let obj = ctx.root().join("obj");
        if obj.exists() {
            let files = ctx.walk_files(&obj);

            let generated = files
                .iter()
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.ends_with(".g.cs"))
                })
                .count();
            if generated > 0 {
                report.note(format!("Found {} generated code files", generated));
            } else {
                report.warning("No generated code files found (XAML might not be compiling)");
            }

            let has_cache = files.iter().any(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.to_ascii_lowercase().contains("avalonia"))
            });
            if has_cache {
                report.note("Avalonia build cache exists");
            }
        } else {
            report.warning("No obj folder found (project hasn't been built)");
        }

        let bin = ctx.root().join("bin");
        if bin.exists() {
            let exe_count = ctx
                .walk_files(&bin)
                .iter()
                .filter(|p| p.extension().is_some_and(|e| e == "exe"))
                .count();
            if exe_count > 0 {
                report.note(format!("Found {} executable files", exe_count));
            }
        } else {
            report.warning("No bin folder found");
        }
    }
}
