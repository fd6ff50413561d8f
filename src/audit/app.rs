//! Application entry file check: `App.axaml` and its code-behind.

use std::fs;
use std::sync::LazyLock;

use regex::Regex;

use super::{AuditCheck, AuditContext};
use crate::report::AuditReport;

static STYLE_SOURCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Source="([^"]+)""#).unwrap());

/// Validates the application markup file, its style includes, and the
/// paired code-behind's initialization call.
pub struct AppFilesCheck;

impl AppFilesCheck {
    fn check_app_markup(&self, ctx: &AuditContext, report: &mut AuditReport) {
        let app_xaml = ctx.root().join("App.axaml");
        if !app_xaml.exists() {
            report.issue("App.axaml not found");
            return;
        }

        let content = match fs::read_to_string(&app_xaml) {
            Ok(content) => content,
            Err(e) => {
                report.issue(format!("Failed to read App.axaml: {}", e));
                return;
            }
        };

        if content.trim().is_empty() {
            report.issue("App.axaml is empty");
        } else if !content.contains("Application") {
            report.issue("App.axaml doesn't contain Application root element");
        } else {
            report.note("App.axaml looks valid");
        }

        if content.contains("StyleInclude") {
            for captures in STYLE_SOURCE.captures_iter(&content) {
                let style_path = &captures[1];
                if !ctx.root().join(style_path).exists() {
                    report.issue(format!("App.axaml references missing style: {}", style_path));
                }
            }
        }
    }

    fn check_code_behind(&self, ctx: &AuditContext, report: &mut AuditReport) {
        let app_cs = ctx.root().join("App.axaml.cs");
        if !app_cs.exists() {
            report.issue("App.axaml.cs not found");
            return;
        }

        match fs::read_to_string(&app_cs) {
            Ok(content) => {
                if !content.contains("InitializeComponent") {
                    report.warning("App.axaml.cs doesn't call InitializeComponent()");
                }
                report.note("App.axaml.cs exists");
            }
            Err(e) => report.issue(format!("Failed to read App.axaml.cs: {}", e)),
        }
    }
}

impl AuditCheck for AppFilesCheck {
    fn id(&self) -> &'static str {
        "app-files"
    }

    fn name(&self) -> &str {
        "Application Files"
    }

    fn description(&self) -> &str {
        "Checks App.axaml and its code-behind"
    }

    fn run(&self, ctx: &AuditContext, report: &mut AuditReport) {
        self.check_app_markup(ctx, report);
        self.check_code_behind(ctx, report);
    }
}
