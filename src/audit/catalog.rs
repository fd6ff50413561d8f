//! Rule catalog: the framework-specific tables the checks consult.
//!
//! The misspelling list, the unsupported-attribute list, and the expected
//! `x:Class` namespace prefix are tied to one framework version and one
//! application's conventions. They ship as built-in defaults but can be
//! replaced wholesale with `--catalog <file>`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

/// A known attribute misspelling and its correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Misspelling {
    /// The token as it appears in broken markup.
    pub found: String,
    /// The correct attribute name.
    pub expected: String,
}

/// Framework-specific rule tables consulted by the checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCatalog {
    /// Substring identifying framework packages in the descriptor.
    pub framework_marker: String,
    /// Framework version label used in diagnostic wording.
    pub framework_version: String,
    /// Expected root namespace for `x:Class` declarations.
    pub namespace_prefix: String,
    /// Known misspelled attribute names.
    pub misspellings: Vec<Misspelling>,
    /// Attributes unsupported on `StackPanel` in the targeted version.
    pub unsupported_stackpanel_attrs: Vec<String>,
}

impl RuleCatalog {
    /// The built-in catalog, targeting Avalonia 11.0.7.
    pub fn builtin() -> Self {
        Self {
            framework_marker: "Avalonia".to_string(),
            framework_version: "11.0.7".to_string(),
            namespace_prefix: "JobFinderApp.Desktop".to_string(),
            misspellings: vec![
                Misspelling {
                    found: "ColumnDefinin".to_string(),
                    expected: "ColumnDefinitions".to_string(),
                },
                Misspelling {
                    found: "RowDefinin".to_string(),
                    expected: "RowDefinitions".to_string(),
                },
                Misspelling {
                    found: "MultiClass".to_string(),
                    expected: "Classes".to_string(),
                },
            ],
            unsupported_stackpanel_attrs: vec![
                "ColumnGap".to_string(),
                "RowGap".to_string(),
                "Padding".to_string(),
            ],
        }
    }

    /// Load a replacement catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AuditError::CatalogLoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| AuditError::CatalogLoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_catalog_matches_targeted_framework() {
        let catalog = RuleCatalog::builtin();

        assert_eq!(catalog.framework_marker, "Avalonia");
        assert_eq!(catalog.framework_version, "11.0.7");
        assert_eq!(catalog.misspellings.len(), 3);
        assert!(catalog
            .misspellings
            .iter()
            .any(|m| m.found == "MultiClass" && m.expected == "Classes"));
        assert_eq!(
            catalog.unsupported_stackpanel_attrs,
            vec!["ColumnGap", "RowGap", "Padding"]
        );
    }

    #[test]
    fn load_round_trips_through_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        let original = RuleCatalog::builtin();
        fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

        let loaded = RuleCatalog::load(&path).unwrap();

        assert_eq!(loaded.namespace_prefix, original.namespace_prefix);
        assert_eq!(loaded.misspellings.len(), original.misspellings.len());
    }

    #[test]
    fn load_missing_file_is_catalog_error() {
        let err = RuleCatalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, AuditError::CatalogLoadError { .. }));
    }

    #[test]
    fn load_malformed_json_is_catalog_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        fs::write(&path, "{ not json").unwrap();

        let err = RuleCatalog::load(&path).unwrap_err();
        assert!(matches!(err, AuditError::CatalogLoadError { .. }));
    }
}
