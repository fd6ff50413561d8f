//! Findings and the audit report accumulator.
//!
//! A [`Finding`] is one reported observation, classified as issue, warning,
//! or info. The [`AuditReport`] owns three append-only buckets of findings
//! for a single audit run. Findings are recorded in generation order and are
//! never deduplicated or mutated after creation, so re-running the audit on
//! an unchanged tree produces identical output.

use serde::Serialize;

/// Classification of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Informational note, nothing to fix.
    Info,
    /// Non-fatal problem that should be addressed.
    Warning,
    /// Problem that will likely break the build or runtime.
    Issue,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Info => write!(f, "info"),
            Category::Warning => write!(f, "warning"),
            Category::Issue => write!(f, "issue"),
        }
    }
}

/// A single reported observation.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Classification of this finding.
    pub category: Category,
    /// Human-readable message.
    pub message: String,
    /// File the finding refers to, relative to the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line number within `file`, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Finding {
    /// Create a new finding.
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            file: None,
            line: None,
        }
    }

    /// Attach a file attribution.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attach a 1-based line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Accumulated findings for one audit run.
///
/// Owned exclusively by a single invocation and discarded after printing.
#[derive(Debug, Default)]
pub struct AuditReport {
    issues: Vec<Finding>,
    warnings: Vec<Finding>,
    info: Vec<Finding>,
}

impl AuditReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue.
    pub fn issue(&mut self, message: impl Into<String>) {
        self.issues.push(Finding::new(Category::Issue, message));
    }

    /// Record a warning.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(Finding::new(Category::Warning, message));
    }

    /// Record an informational note.
    ///
    /// Named `note` so the accessor below can keep the `info()` name,
    /// symmetrical with `issues()` and `warnings()`.
    pub fn note(&mut self, message: impl Into<String>) {
        self.info.push(Finding::new(Category::Info, message));
    }

    /// Record a pre-built finding in its category bucket.
    pub fn push(&mut self, finding: Finding) {
        match finding.category {
            Category::Issue => self.issues.push(finding),
            Category::Warning => self.warnings.push(finding),
            Category::Info => self.info.push(finding),
        }
    }

    /// Issues in generation order.
    pub fn issues(&self) -> &[Finding] {
        &self.issues
    }

    /// Warnings in generation order.
    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    /// Informational notes in generation order.
    pub fn info(&self) -> &[Finding] {
        &self.info
    }

    /// Whether any issue was recorded.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Whether no finding of any category was recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty() && self.info.is_empty()
    }

    /// Total number of findings across all categories.
    pub fn len(&self) -> usize {
        self.issues.len() + self.warnings.len() + self.info.len()
    }
}
