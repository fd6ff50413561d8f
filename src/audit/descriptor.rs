//! Project descriptor (`.csproj`) check.
//!
//! Shallow XML inspection only: package references are matched by attribute,
//! not validated against any package feed.

use std::fs;

use super::{AuditCheck, AuditContext};
use crate::report::AuditReport;

/// Inspects the project descriptor for framework package references and
/// the framework enable flag.
pub struct DescriptorCheck;

impl AuditCheck for DescriptorCheck {
    fn id(&self) -> &'static str {
        "descriptor"
    }

    fn name(&self) -> &str {
        "Project Descriptor"
    }

    fn description(&self) -> &str {
        "Checks the .csproj for framework packages and build settings"
    }

    fn run(&self, ctx: &AuditContext, report: &mut AuditReport) {
        let descriptors = ctx.files_with_extension(ctx.root(), "csproj");
        let Some(path) = descriptors.first() else {
            report.issue("No .csproj file found");
            return;
        };
        let name = ctx.display_path(path);

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                report.issue(format!("{}: Failed to read file - {}", name, e));
                return;
            }
        };

        let doc = match roxmltree::Document::parse(&content) {
            Ok(doc) => doc,
            Err(e) => {
                report.issue(format!("Failed to parse .csproj file: {}", e));
                return;
            }
        };

        let marker = &ctx.catalog().framework_marker;

        let packages: Vec<String> = doc
            .descendants()
            .filter(|node| node.has_tag_name("PackageReference"))
            .filter_map(|node| {
                let include = node.attribute("Include")?;
                include.contains(marker.as_str()).then(|| {
                    let version = node.attribute("Version").unwrap_or("Unknown");
                    format!("{} v{}", include, version)
                })
            })
            .collect();

        if packages.is_empty() {
            report.issue(format!("No {} packages found in project file", marker));
        } else {
            report.note(format!("{} packages:", marker));
            for pkg in packages {
                report.note(format!("  - {}", pkg));
            }
        }

        // The Use<Framework> MSBuild property, e.g. UseAvalonia.
        let flag_name = format!("Use{}", marker);
        match doc
            .descendants()
            .find(|node| node.has_tag_name(flag_name.as_str()))
        {
            None => report.warning(format!("{} property not found in project file", flag_name)),
            Some(node) if node.text() != Some("true") => {
                report.issue(format!("{} property is not set to true", flag_name));
            }
            Some(_) => {}
        }
    }
}
