//! axaudit - Structural diagnostics for Avalonia desktop projects.
//!
//! axaudit runs a fixed pipeline of independent, stateless checks over a
//! project tree and reports what it finds: missing required files, malformed
//! descriptor XML, common markup mistakes, unreferenced style sheets, and
//! absent build artifacts. It only reports; it never modifies the project.
//!
//! # Modules
//!
//! - [`audit`] - The check pipeline, rule catalog, and project context
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`report`] - Findings, the report accumulator, and output formatters
//! - [`ui`] - Terminal styling and the interactive path prompt
//!
//! # Example
//!
//! ```no_run
//! use axaudit::audit::{Auditor, RuleCatalog};
//! use std::path::Path;
//!
//! let report = Auditor::new(Path::new("./MyApp"), RuleCatalog::builtin()).run();
//! for finding in report.issues() {
//!     eprintln!("{}", finding.message);
//! }
//! ```

pub mod audit;
pub mod cli;
pub mod error;
pub mod report;
pub mod ui;

pub use error::{AuditError, Result};
