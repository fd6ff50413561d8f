//! Terminal output styling and interactive prompts.

pub mod prompt;
pub mod theme;

pub use prompt::prompt_project_path;
pub use theme::{should_use_colors, AuditTheme};
