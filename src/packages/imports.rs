//! External import classification

use super::PackageRecord;
use std::collections::HashMap;
use tracing::trace;

/// Reports whether `import_path` lives outside the standard library and the
/// scanned module: its first path segment must look like a domain name.
pub fn is_external(import_path: &str) -> bool {
    match import_path.split_once('/') {
        Some((first, _)) => first.contains('.'),
        None => false,
    }
}

/// Import path -> externality, built once per run.
///
/// A scanned package's own path is always recorded as internal. Paths seen
/// only as imports are classified on first sight and never revisited.
#[derive(Debug, Default, Clone)]
pub struct ImportTable {
    entries: HashMap<String, bool>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, package: &PackageRecord) {
        self.entries.insert(package.import_path.clone(), false);

        for import_path in package.all_imports() {
            if self.entries.contains_key(import_path) {
                continue;
            }
            let external = is_external(import_path);
            trace!(import = import_path, external, "Classified import");
            self.entries.insert(import_path.to_string(), external);
        }
    }

    pub fn is_external(&self, import_path: &str) -> Option<bool> {
        self.entries.get(import_path).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// External import paths, sorted ascending.
    pub fn external_imports(&self) -> Vec<String> {
        let mut imports: Vec<String> = self
            .entries
            .iter()
            .filter(|&(_, &external)| external)
            .map(|(path, _)| path.clone())
            .collect();
        imports.sort();
        imports
    }
}

impl Extend<PackageRecord> for ImportTable {
    fn extend<T: IntoIterator<Item = PackageRecord>>(&mut self, iter: T) {
        for package in iter {
            self.record(&package);
        }
    }
}

impl FromIterator<PackageRecord> for ImportTable {
    fn from_iter<T: IntoIterator<Item = PackageRecord>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
