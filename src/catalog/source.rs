//! Catalog source abstraction.
//!
//! The plugin shim does not care where a catalog comes from; it asks a
//! [`CatalogSource`] for one and keeps the built-in catalog if the configured
//! source fails.

use crate::domain::error::Result;
use crate::domain::Catalog;
use std::path::PathBuf;

/// Something that can produce a validated catalog.
///
/// # Implementations
///
/// - [`JsonCatalogFile`]: A JSON catalog file on disk
pub trait CatalogSource {
    /// Loads the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or its content is invalid.
    fn load(&self) -> Result<Catalog>;

    /// Short human-readable label used in logs and the header.
    fn describe(&self) -> String;
}

/// A JSON catalog file, addressed by a sandbox path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    /// Creates a source for the given path.
    ///
    /// The path is expected to already be in sandbox form (see
    /// [`resolve_config_path`](crate::infrastructure::resolve_config_path)).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonCatalogFile {
    fn load(&self) -> Result<Catalog> {
        super::load_catalog(&self.path)
    }

    fn describe(&self) -> String {
        crate::infrastructure::display_path(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_file_description_hides_sandbox_prefix() {
        let source = JsonCatalogFile::new("/host/books/catalog.json");
        assert_eq!(source.describe(), "~/books/catalog.json");
    }

    #[test]
    fn json_file_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonCatalogFile::new(dir.path().join("missing.json"));
        assert!(source.load().is_err());
    }
}
