//! Library-level tests covering the audit engine end to end.

use std::fs;

use axaudit::audit::{Auditor, RuleCatalog};
use axaudit::report::{AuditReport, HumanFormatter, JsonFormatter, ReportFormatter};
use axaudit::ui::AuditTheme;
use tempfile::TempDir;

fn audit(temp: &TempDir) -> AuditReport {
    Auditor::new(temp.path(), RuleCatalog::builtin()).run()
}

fn render_human(report: &AuditReport) -> String {
    let formatter = HumanFormatter::new(AuditTheme::plain(), false);
    let mut output = Vec::new();
    formatter.format(report, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn missing_required_files_yield_one_issue_each_in_order() {
    let temp = TempDir::new().unwrap();
    let report = audit(&temp);

    let missing: Vec<_> = report
        .issues()
        .iter()
        .filter(|f| f.message.starts_with("Missing required file:"))
        .map(|f| f.message.as_str())
        .collect();
    assert_eq!(
        missing,
        vec![
            "Missing required file: *.csproj",
            "Missing required file: App.axaml",
            "Missing required file: App.axaml.cs",
        ]
    );
}

#[test]
fn descriptor_without_framework_packages_reports_issue() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("App.csproj"),
        r#"<Project><ItemGroup>
             <PackageReference Include="Serilog" Version="3.0.0" />
           </ItemGroup></Project>"#,
    )
    .unwrap();

    let report = audit(&temp);

    assert!(report
        .issues()
        .iter()
        .any(|f| f.message == "No Avalonia packages found in project file"));
}

#[test]
fn markup_misspelling_reports_correction_and_line_number() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("Main.axaml"),
        "<Window>\n  <Grid>\n    <Grid.MultiClass>\n  </Grid>\n</Window>",
    )
    .unwrap();

    let report = audit(&temp);

    let finding = report
        .issues()
        .iter()
        .find(|f| f.message.contains("MultiClass"))
        .expect("misspelling finding");
    assert!(finding.message.contains("(should be 'Classes')"));
    assert!(finding.message.contains("Main.axaml:3:"));
    assert_eq!(finding.line, Some(3));
}

#[test]
fn dangling_style_include_yields_exactly_one_issue() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("App.axaml"),
        r#"<Application>
             <StyleInclude Source="Styles/Gone.axaml"/>
           </Application>"#,
    )
    .unwrap();

    let report = audit(&temp);

    let dangling: Vec<_> = report
        .issues()
        .iter()
        .filter(|f| f.message.contains("references missing style"))
        .collect();
    assert_eq!(dangling.len(), 1);
    assert!(dangling[0].message.contains("Styles/Gone.axaml"));
}

#[test]
fn unchanged_tree_renders_byte_identical_reports() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("MyApp.csproj"), "<Project/>").unwrap();
    fs::create_dir(temp.path().join("Views")).unwrap();
    fs::write(temp.path().join("Views/Z.axaml"), "<Window/>").unwrap();
    fs::write(temp.path().join("Views/A.axaml"), "<Window/>").unwrap();

    let human_a = render_human(&audit(&temp));
    let human_b = render_human(&audit(&temp));
    assert_eq!(human_a, human_b);

    let render_json = || {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(&audit(&temp), &mut output)
            .unwrap();
        output
    };
    assert_eq!(render_json(), render_json());
}

#[test]
fn unreadable_markup_becomes_issue_without_aborting() {
    // Invalid UTF-8 makes read_to_string fail for this file.
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("Views")).unwrap();
    fs::write(temp.path().join("Views/Bad.axaml"), [0xff, 0xfe, 0x00, 0x9f]).unwrap();
    fs::write(temp.path().join("Views/Real.axaml"), "<Window/>").unwrap();

    let report = audit(&temp);

    assert!(report
        .issues()
        .iter()
        .any(|f| f.message.starts_with("Views/Bad.axaml: Failed to read file -")));

    // The failure stayed local: the remaining markup file and the later
    // checks still produced their usual findings.
    assert!(report
        .info()
        .iter()
        .any(|f| f.message == "Found 2 XAML files"));
    assert!(report
        .warnings()
        .iter()
        .any(|f| f.message == "No bin folder found"));
}

#[test]
fn report_groups_render_in_generation_order() {
    let temp = TempDir::new().unwrap();
    let output = render_human(&audit(&temp));

    let csproj = output.find("Missing required file: *.csproj").unwrap();
    let app = output.find("Missing required file: App.axaml").unwrap();
    assert!(csproj < app);
    assert!(output.contains("Recommended actions:"));
}
