//! Package metadata as reported by `go list -json`

use serde::{Deserialize, Serialize};

/// One package from the enumeration stream.
///
/// Only the fields the classifier needs are decoded; everything else
/// `go list` reports is ignored. Missing lists decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageRecord {
    #[serde(default)]
    pub import_path: String,

    #[serde(default)]
    pub imports: Vec<String>,

    #[serde(default)]
    pub test_imports: Vec<String>,

    /// Imports of the package's `_test` external test package
    #[serde(default)]
    pub x_test_imports: Vec<String>,
}

impl PackageRecord {
    pub fn new(import_path: impl Into<String>) -> Self {
        Self {
            import_path: import_path.into(),
            ..Default::default()
        }
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_test_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_imports = imports.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_x_test_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.x_test_imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Build-time imports, then in-package test imports, then external test imports.
    pub fn all_imports(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .chain(&self.test_imports)
            .chain(&self.x_test_imports)
            .map(String::as_str)
    }
}
