//! Package enumeration and import classification

pub mod imports;
pub mod record;
pub mod source;

pub use imports::{is_external, ImportTable};
pub use record::PackageRecord;
pub use source::{GoListSource, JsonStreamSource, PackageSource};

use crate::error::Result;
use tracing::debug;

/// Drains `source` into an import table. Any enumeration or decode error aborts the scan.
pub fn collect_imports<S: PackageSource>(source: S) -> Result<ImportTable> {
    let mut table = ImportTable::new();
    let mut package_count = 0usize;

    for package in source.packages()? {
        let package = package?;
        debug!(package = %package.import_path, "Scanning package");
        table.record(&package);
        package_count += 1;
    }

    debug!(
        packages = package_count,
        imports = table.len(),
        "Finished scanning packages"
    );
    Ok(table)
}
