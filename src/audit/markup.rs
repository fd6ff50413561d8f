//! Markup (`.axaml`) file check.
//!
//! Text-level scanning only, per the project scope: no XAML parsing, no
//! schema validation. The misspelling and unsupported-attribute tables come
//! from the active [`RuleCatalog`](super::RuleCatalog).

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::context::{find_line_matching, find_line_number};
use super::{AuditCheck, AuditContext};
use crate::report::{AuditReport, Category, Finding};

static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"x:Class="([^"]+)""#).unwrap());

/// Scans every markup file for empty content, known misspellings,
/// unsupported `StackPanel` attributes, and `x:Class` mismatches.
pub struct MarkupCheck;

impl MarkupCheck {
    fn check_file(&self, ctx: &AuditContext, path: &Path, report: &mut AuditReport) {
        let name = ctx.display_path(path);

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                report.issue(format!("{}: Failed to read file - {}", name, e));
                return;
            }
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            report.issue(format!("{}: File is empty", name));
            return;
        }
        if !trimmed.starts_with('<') {
            report.issue(format!("{}: No root element", name));
            return;
        }

        let catalog = ctx.catalog();

        for typo in &catalog.misspellings {
            if content.contains(typo.found.as_str()) {
                let line = find_line_number(&content, &typo.found);
                report.push(
                    Finding::new(
                        Category::Issue,
                        format!(
                            "{}:{}: Found '{}' (should be '{}')",
                            name, line, typo.found, typo.expected
                        ),
                    )
                    .with_file(name.clone())
                    .with_line(line),
                );
            }
        }

        for attr in &catalog.unsupported_stackpanel_attrs {
            let Ok(pattern) = Regex::new(&format!(r"<StackPanel[^>]*{}=", regex::escape(attr)))
            else {
                continue;
            };
            if pattern.is_match(&content) {
                let line = find_line_matching(&content, &pattern);
                let message = if attr == "Padding" {
                    format!(
                        "{}:{}: StackPanel doesn't support Padding (use Border instead)",
                        name, line
                    )
                } else {
                    format!(
                        "{}:{}: {} not supported in {} {} (use Margin instead)",
                        name, line, attr, catalog.framework_marker, catalog.framework_version
                    )
                };
                report.push(
                    Finding::new(Category::Issue, message)
                        .with_file(name.clone())
                        .with_line(line),
                );
            }
        }

        if let Some(captures) = CLASS_ATTR.captures(&content) {
            let declared = &captures[1];
            if let Some(expected) = expected_class_name(ctx, path) {
                if declared != expected {
                    report.warning(format!(
                        "{}: x:Class '{}' might not match file location (expected '{}')",
                        name, declared, expected
                    ));
                }
            }
        }
    }
}

/// Derive the fully-qualified class name a markup file should declare,
/// from its path relative to the root and the catalog namespace prefix.
fn expected_class_name(ctx: &AuditContext, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(ctx.root()).ok()?;
    let stem = rel.file_stem()?.to_str()?;

    let mut namespace = ctx.catalog().namespace_prefix.clone();
    if let Some(parent) = rel.parent() {
        for part in parent.components() {
            let part = part.as_os_str().to_str()?;
            namespace.push('.');
            namespace.push_str(part);
        }
    }

    Some(format!("{}.{}", namespace, stem))
}

impl AuditCheck for MarkupCheck {
    fn id(&self) -> &'static str {
        "markup"
    }

    fn name(&self) -> &str {
        "Markup Files"
    }

    fn description(&self) -> &str {
        "Scans .axaml files for common authoring mistakes"
    }

    fn run(&self, ctx: &AuditContext, report: &mut AuditReport) {
        let files = ctx.markup_files();
        report.note(format!("Found {} XAML files", files.len()));

        for path in &files {
            self.check_file(ctx, path, report);
        }
    }
}
