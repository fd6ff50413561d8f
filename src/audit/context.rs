//! Read-only view of the project tree shared by all checks.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use super::catalog::RuleCatalog;

/// Build-output directories excluded from markup enumeration.
const BUILD_DIRS: [&str; 2] = ["obj", "bin"];

/// The project root plus the rule catalog, handed to every check.
///
/// All traversal helpers return entries in sorted order so repeated runs
/// over an unchanged tree generate findings in identical order.
#[derive(Debug)]
pub struct AuditContext {
    root: PathBuf,
    catalog: RuleCatalog,
}

impl AuditContext {
    /// Create a context for the given project root.
    pub fn new(root: impl Into<PathBuf>, catalog: RuleCatalog) -> Self {
        Self {
            root: root.into(),
            catalog,
        }
    }

    /// The project root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The active rule catalog.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Display name for a path, relative to the root where possible.
    ///
    /// Separators are normalized to `/` so report text is stable across
    /// platforms.
    pub fn display_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Files directly inside `dir` with the given extension, sorted by name.
    pub fn files_with_extension(&self, dir: &Path, ext: &str) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == ext))
            .collect();
        files.sort();
        files
    }

    /// All regular files under `dir`, recursively, sorted.
    pub fn walk_files(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect()
    }

    /// All markup files under the root, skipping build-output directories.
    pub fn markup_files(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !(entry.file_type().is_dir()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| BUILD_DIRS.contains(&name)))
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|p| p.extension().is_some_and(|e| e == "axaml"))
            .collect()
    }
}

/// First 1-based line containing `term`, or 0 when absent.
///
/// Diagnostic display only; checks never branch on the returned line.
pub fn find_line_number(content: &str, term: &str) -> usize {
    content
        .lines()
        .position(|line| line.contains(term))
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// First 1-based line matching `pattern`, or 0 when absent.
pub fn find_line_matching(content: &str, pattern: &Regex) -> usize {
    content
        .lines()
        .position(|line| pattern.is_match(line))
        .map(|i| i + 1)
        .unwrap_or(0)
}
