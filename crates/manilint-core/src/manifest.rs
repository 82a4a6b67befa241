//! # Manifest Decoding
//!
//! A manifest is a YAML sequence of items. Decoding is all-or-nothing: a
//! malformed document or an unknown type token fails before any rule runs.

use std::path::{Path, PathBuf};

use crate::error::ManifestError;
use crate::item::Item;

/// An ordered, decoded manifest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    items: Vec<Item>,
}

impl Manifest {
    /// Decode a manifest from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ManifestError> {
        Self::decode(content, Path::new("<inline>"))
    }

    /// Read and decode the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ManifestError::Io(e)
            }
        })?;
        Self::decode(&content, path)
    }

    fn decode(content: &str, path: &Path) -> Result<Self, ManifestError> {
        // An empty document decodes to no items rather than a type error.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let items: Option<Vec<Item>> =
            serde_yaml::from_str(content).map_err(|source| ManifestError::Decode {
                path: PathBuf::from(path),
                source,
            })?;
        let items = items.unwrap_or_default();
        tracing::debug!(path = %path.display(), items = items.len(), "decoded manifest");
        Ok(Self { items })
    }

    /// Items in declaration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// True when the manifest declares no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
