//! Resource check: assets and style sheets.

use std::fs;

use super::{AuditCheck, AuditContext};
use crate::report::AuditReport;

/// Surveys the `Assets` and `Styles` folders and cross-checks that every
/// style sheet is referenced from the application markup file.
pub struct ResourcesCheck;

impl AuditCheck for ResourcesCheck {
    fn id(&self) -> &'static str {
        "resources"
    }

    fn name(&self) -> &str {
        "Resources"
    }

    fn description(&self) -> &str {
        "Checks asset and style files and their references"
    }

    fn run(&self, ctx: &AuditContext, report: &mut AuditReport) {
        let assets = ctx.root().join("Assets");
        if assets.exists() {
            let count = ctx.walk_files(&assets).len();
            report.note(format!("Found {} asset files", count));
        } else {
            report.warning("No Assets folder found");
        }

        let styles = ctx.root().join("Styles");
        if !styles.exists() {
            report.note("No Styles folder found");
            return;
        }

        let style_files = ctx.files_with_extension(&styles, "axaml");
        report.note(format!("Found {} style files", style_files.len()));

        let app_xaml = ctx.root().join("App.axaml");
        if !app_xaml.exists() {
            // Absence of App.axaml is reported by the structure check.
            return;
        }
        let app_content = match fs::read_to_string(&app_xaml) {
            Ok(content) => content,
            Err(e) => {
                report.issue(format!("Failed to read App.axaml: {}", e));
                return;
            }
        };

        for style_file in &style_files {
            let name = match style_file.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            let style_ref = format!("Styles/{}", name);
            if !app_content.contains(&style_ref) {
                report.warning(format!("Style file {} not referenced in App.axaml", name));
            }
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
        ResourcesCheck.run(&ctx, &mut report);
        report
    }

    #[test]
    fn missing_assets_folder_warns() {
        let temp = TempDir::new().unwrap();
        let report = run(&temp);

        assert!(report
            .warnings()
            .iter()
            .any(|f| f.message == "No Assets folder found"));
    }

    #[test]
    fn asset_files_counted_recursively() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("Assets/Icons")).unwrap();
        fs::write(temp.path().join("Assets/logo.png"), "").unwrap();
        fs::write(temp.path().join("Assets/Icons/close.svg"), "").unwrap();

        let report = run(&temp);

        assert!(report
            .info()
            .iter()
            .any(|f| f.message == "Found 2 asset files"));
    }

    #[test]
    fn missing_styles_folder_is_info() {
        let temp = TempDir::new().unwrap();
        let report = run(&temp);

        assert!(report
            .info()
            .iter()
            .any(|f| f.message == "No Styles folder found"));
    }

    #[test]
    fn unreferenced_style_warns() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Styles")).unwrap();
        fs::write(temp.path().join("Styles/Dark.axaml"), "<Styles/>").unwrap();
        fs::write(temp.path().join("Styles/Light.axaml"), "<Styles/>").unwrap();
        fs::write(
            temp.path().join("App.axaml"),
            r#"<Application>
                 <StyleInclude Source="Styles/Light.axaml"/>
               </Application>"#,
        )
        .unwrap();

        let report = run(&temp);

        assert!(report
            .warnings()
            .iter()
            .any(|f| f.message == "Style file Dark.axaml not referenced in App.axaml"));
        assert!(!report
            .warnings()
            .iter()
            .any(|f| f.message.contains("Light.axaml")));
    }

    #[test]
    fn style_count_reported() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Styles")).unwrap();
        fs::write(temp.path().join("Styles/Theme.axaml"), "<Styles/>").unwrap();

        let report = run(&temp);

        assert!(report
            .info()
            .iter()
            .any(|f| f.message == "Found 1 style files"));
    }

    #[test]
    fn unreadable_app_markup_is_issue_not_silent_skip() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Styles")).unwrap();
        fs::write(temp.path().join("Styles/Theme.axaml"), "<Styles/>").unwrap();
        // A directory named App.axaml exists but cannot be read as a file.
        fs::create_dir(temp.path().join("App.axaml")).unwrap();

        let report = run(&temp);

        assert!(report
            .issues()
            .iter()
            .any(|f| f.message.starts_with("Failed to read App.axaml:")));
        assert!(!report
            .warnings()
            .iter()
            .any(|f| f.message.contains("not referenced")));
    }

    #[test]
    fn styles_without_app_markup_skip_reference_check() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Styles")).unwrap();
        fs::write(temp.path().join("Styles/Theme.axaml"), "<Styles/>").unwrap();

        let report = run(&temp);

        assert!(!report
            .warnings()
            .iter()
            .any(|f| f.message.contains("not referenced")));
    }
}
