//! The audit engine: a fixed, ordered pipeline of independent checks.
//!
//! # Overview
//!
//! Each check implements [`AuditCheck`] and appends findings to the shared
//! [`AuditReport`](crate::report::AuditReport). Checks are stateless, never
//! see each other's results, and never abort the run: per-file read or parse
//! failures are downgraded to issue findings inside the check itself.
//!
//! The check list is an ordered `Vec`, not a keyed registry, because report
//! output follows generation order and must be reproducible run-to-run.
//!
//! # Example
//!
//! ```no_run
//! use axaudit::audit::{Auditor, RuleCatalog};
//! use std::path::Path;
//!
//! let report = Auditor::new(Path::new("./MyApp"), RuleCatalog::builtin()).run();
//! println!("{} issues", report.issues().len());
//! ```

pub mod app;
pub mod artifacts;
pub mod catalog;
pub mod context;
pub mod descriptor;
pub mod markup;
pub mod resources;
pub mod structure;

pub use catalog::{Misspelling, RuleCatalog};
pub use context::{find_line_matching, find_line_number, AuditContext};

use std::path::Path;

use crate::report::AuditReport;

use app::AppFilesCheck;
use artifacts::ArtifactsCheck;
use descriptor::DescriptorCheck;
use markup::MarkupCheck;
use resources::ResourcesCheck;
use structure::StructureCheck;

/// A single structural check over the project tree.
pub trait AuditCheck {
    /// Stable identifier for this check.
    fn id(&self) -> &'static str;

    /// Human-readable name of the check.
    fn name(&self) -> &str;

    /// Description of what this check inspects.
    fn description(&self) -> &str;

    /// Inspect the project and append findings to the report.
    fn run(&self, ctx: &AuditContext, report: &mut AuditReport);
}

/// The built-in check pipeline, in execution order.
pub fn builtin_checks() -> Vec<Box<dyn AuditCheck>> {
    vec![
        Box::new(StructureCheck),
        Box::new(DescriptorCheck),
        Box::new(MarkupCheck),
        Box::new(ResourcesCheck),
        Box::new(AppFilesCheck),
        Box::new(ArtifactsCheck),
    ]
}

/// Runs the check pipeline against one project root.
pub struct Auditor {
    ctx: AuditContext,
    checks: Vec<Box<dyn AuditCheck>>,
}

impl Auditor {
    /// Create an auditor with the built-in check pipeline.
    pub fn new(project_root: &Path, catalog: RuleCatalog) -> Self {
        Self {
            ctx: AuditContext::new(project_root, catalog),
            checks: builtin_checks(),
        }
    }

    /// Execute every check in order and return the accumulated report.
    pub fn run(&self) -> AuditReport {
        let mut report = AuditReport::new();
        for check in &self.checks {
            tracing::debug!(check = check.id(), "running {}", check.name());
            check.run(&self.ctx, &mut report);
        }
        report
    }
}
