//! Interactive prompt for the project path.

use std::path::PathBuf;

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{AuditError, Result};

/// Convert dialoguer errors to AuditError.
fn map_dialoguer_err(e: dialoguer::Error) -> AuditError {
    AuditError::Io(e.into())
}

/// Ask the user for the project root path.
///
/// Fails with [`AuditError::MissingProjectPath`] when stdin is not a
/// terminal, so headless invocations error out instead of hanging.
pub fn prompt_project_path(term: &Term) -> Result<PathBuf> {
    if !term.is_term() {
        return Err(AuditError::MissingProjectPath);
    }

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Path to Avalonia project directory")
        .interact_text_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PathBuf::from(input.trim()))
}
