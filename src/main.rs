//! axaudit CLI entry point.

use std::process::ExitCode;

use axaudit::audit::{Auditor, RuleCatalog};
use axaudit::cli::Cli;
use axaudit::report::{HumanFormatter, JsonFormatter, ReportFormat, ReportFormatter};
use axaudit::ui::{prompt_project_path, AuditTheme};
use axaudit::{AuditError, Result};
use clap::Parser;
use console::Term;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("axaudit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("axaudit=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run(cli: &Cli, theme: &AuditTheme) -> Result<()> {
    let root = match &cli.path {
        Some(path) => path.clone(),
        None => prompt_project_path(&Term::stderr())?,
    };

    if !root.exists() {
        return Err(AuditError::ProjectRootNotFound { path: root });
    }

    let catalog = match &cli.catalog {
        Some(path) => RuleCatalog::load(path)?,
        None => RuleCatalog::builtin(),
    };

    tracing::debug!(root = %root.display(), "starting audit");
    let report = Auditor::new(&root, catalog).run();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        ReportFormat::Human => {
            if !cli.quiet {
                println!(
                    "{}",
                    theme.format_header(&format!("Avalonia project audit: {}", root.display()))
                );
                println!();
            }
            HumanFormatter::new(theme.clone(), cli.quiet).format(&report, &mut out)?;
        }
        ReportFormat::Json => JsonFormatter::new().format(&report, &mut out)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let theme = AuditTheme::auto();

    match run(&cli, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", theme.format_error(&e.to_string()));
            ExitCode::from(1)
        }
    }
}
