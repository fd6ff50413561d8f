//! Basic project structure check: required files and conventional folders.

use super::{AuditCheck, AuditContext};
use crate::report::AuditReport;

/// Verifies the descriptor and application entry files exist and surveys
/// the conventional `Views` and `Controls` folders.
pub struct StructureCheck;

impl StructureCheck {
    /// Find the first match for a required top-level pattern.
    ///
    /// Patterns are either a literal file name or `*.<ext>`.
    fn first_match(&self, ctx: &AuditContext, pattern: &str) -> Option<String> {
        if let Some(ext) = pattern.strip_prefix("*.") {
            ctx.files_with_extension(ctx.root(), ext)
                .first()
                .map(|p| ctx.display_path(p))
        } else {
            let candidate = ctx.root().join(pattern);
            candidate.is_file().then(|| pattern.to_string())
        }
    }
}

impl AuditCheck for StructureCheck {
    fn id(&self) -> &'static str {
        "structure"
    }

    fn name(&self) -> &str {
        "Project Structure"
    }

    fn description(&self) -> &str {
        "Checks required project files and conventional folders"
    }

    fn run(&self, ctx: &AuditContext, report: &mut AuditReport) {
        let required = ["*.csproj", "App.axaml", "App.axaml.cs"];

        for pattern in required {
            match self.first_match(ctx, pattern) {
                Some(name) => report.note(format!("Found: {}", name)),
                None => report.issue(format!("Missing required file: {}", pattern)),
            }
        }

        let views = ctx.root().join("Views");
        if !views.exists() {
            report.warning("Views folder doesn't exist");
        } else {
            let count = ctx.files_with_extension(&views, "axaml").len();
            report.note(format!("Found {} view files", count));
        }

        let controls = ctx.root().join("Controls");
        if controls.exists() {
            let count = ctx.files_with_extension(&controls, "axaml").len();
            report.note(format!("Found {} control files", count));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::RuleCatalog;
    use std::fs;
    use tempfile::TempDir;

    fn run(temp: &TempDir) -> AuditReport {
        let ctx = AuditContext::new(temp.path(), RuleCatalog::builtin());
        let mut report = AuditReport::new();
        StructureCheck.run(&ctx, &mut report);
        report
    }

    #[test]
    fn empty_root_yields_one_issue_per_required_pattern() {
        let temp = TempDir::new().unwrap();
        let report = run(&temp);

        let messages: Vec<_> = report
            .issues()
            .iter()
            .map(|f| f.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Missing required file: *.csproj",
                "Missing required file: App.axaml",
                "Missing required file: App.axaml.cs",
            ]
        );
    }

    #[test]
    fn present_files_reported_as_info() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("MyApp.csproj"), "<Project/>").unwrap();
        fs::write(temp.path().join("App.axaml"), "<Application/>").unwrap();
        fs::write(temp.path().join("App.axaml.cs"), "class App {}").unwrap();

        let report = run(&temp);

        assert!(report.issues().is_empty());
        let info: Vec<_> = report.info().iter().map(|f| f.message.as_str()).collect();
        assert!(info.contains(&"Found: MyApp.csproj"));
        assert!(info.contains(&"Found: App.axaml"));
        assert!(info.contains(&"Found: App.axaml.cs"));
    }

    #[test]
    fn missing_views_folder_warns() {
        let temp = TempDir::new().unwrap();
        let report = run(&temp);

        assert!(report
            .warnings()
            .iter()
            .any(|f| f.message == "Views folder doesn't exist"));
    }

    #[test]
    fn views_and_controls_counted() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Views")).unwrap();
        fs::write(temp.path().join("Views/Main.axaml"), "").unwrap();
        fs::write(temp.path().join("Views/Other.axaml"), "").unwrap();
        fs::create_dir(temp.path().join("Controls")).unwrap();
        fs::write(temp.path().join("Controls/Badge.axaml"), "").unwrap();

        let report = run(&temp);

        let info: Vec<_> = report.info().iter().map(|f| f.message.as_str()).collect();
        assert!(info.contains(&"Found 2 view files"));
        assert!(info.contains(&"Found 1 control files"));
    }

    #[test]
    fn absent_controls_folder_is_silent() {
        let temp = TempDir::new().unwrap();
        let report = run(&temp);

        assert!(!report
            .info()
            .iter()
            .chain(report.warnings())
            .any(|f| f.message.contains("control")));
    }
}
