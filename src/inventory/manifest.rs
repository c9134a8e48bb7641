use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    case::TestCase,
    inventory::{InventoryProvider, in_package},
};

/// One entry of an inventory manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub case_id: String,
    pub class_name: String,
    pub method_name: String,
}

/// Discovers tests from a JSON manifest written at build time.
///
/// The manifest is an array of [`ManifestEntry`] objects. Only entries whose
/// class lies in the target package are part of the inventory, and like for
/// [`MarkerInventory`](crate::inventory::MarkerInventory) the target package
/// is required. Unlike plan sources, an unreadable or malformed manifest is
/// fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestInventory {
    path: PathBuf,
    target_package: Option<String>,
}

impl ManifestInventory {
    pub fn new(path: impl Into<PathBuf>, target_package: impl Into<String>) -> Self {
        Self::from_target(path, Some(target_package.into()))
    }

    pub fn from_target(path: impl Into<PathBuf>, target_package: Option<String>) -> Self {
        Self {
            path: path.into(),
            target_package,
        }
    }
}

impl InventoryProvider for ManifestInventory {
    fn discover(&self) -> Result<Vec<TestCase>> {
        let package = self
            .target_package
            .as_deref()
            .ok_or(Error::MissingTargetPackage)?;

        let content = fs::read_to_string(&self.path).map_err(|source| Error::Discovery {
            path: self.path.clone(),
            source,
        })?;
        let entries: Vec<ManifestEntry> =
            serde_json::from_str(&content).map_err(|source| Error::Manifest {
                path: self.path.clone(),
                source,
            })?;

        let cases = entries
            .into_iter()
            .filter(|entry| in_package(&entry.class_name, package))
            .map(|entry| TestCase::from_marker(&entry.case_id, entry.class_name, entry.method_name))
            .collect::<Result<Vec<_>>>()?;

        debug!(path = %self.path.display(), package, discovered = cases.len(), "read inventory manifest");
        Ok(cases)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn manifest(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const MANIFEST: &str = r#"[
        {"case_id": "1", "class_name": "a.T", "method_name": "m1"},
        {"case_id": "2", "class_name": "a.T", "method_name": "m2"},
        {"case_id": "3", "class_name": "b.U", "method_name": "m3"}
    ]"#;

    #[test]
    fn reads_entries_of_target_package() {
        let file = manifest(MANIFEST);
        let cases = ManifestInventory::new(file.path(), "a").discover().unwrap();
        assert_eq!(cases, vec![
            TestCase::new(1, "a.T", "m1"),
            TestCase::new(2, "a.T", "m2"),
        ]);

        let cases = ManifestInventory::new(file.path(), "b").discover().unwrap();
        assert_eq!(cases, vec![TestCase::new(3, "b.U", "m3")]);
    }

    #[test]
    fn missing_target_package_is_fatal() {
        let file = manifest(MANIFEST);
        let err = ManifestInventory::from_target(file.path(), None)
            .discover()
            .unwrap_err();
        assert!(matches!(err, Error::MissingTargetPackage));
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = ManifestInventory::new(dir.path().join("inventory.json"), "a")
            .discover()
            .unwrap_err();
        assert!(matches!(err, Error::Discovery { .. }));
    }

    #[test]
    fn malformed_manifest_is_fatal() {
        let file = manifest(r#"{"case_id": "1"}"#);
        let err = ManifestInventory::new(file.path(), "a").discover().unwrap_err();
        assert!(matches!(err, Error::Manifest { .. }));
    }

    #[test]
    fn non_numeric_entry_is_fatal() {
        let file = manifest(r#"[{"case_id": "abc", "class_name": "a.T", "method_name": "m1"}]"#);
        let err = ManifestInventory::new(file.path(), "a").discover().unwrap_err();
        assert!(matches!(err, Error::InvalidCaseId { .. }));
    }
}
