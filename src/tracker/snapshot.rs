//! Snapshot data model and per-artifact measurement recording

use serde::{Deserialize, Serialize};

use crate::error::SizewatchError;

/// One artifact's measurement at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSize {
    /// Artifact identifier (output file name)
    pub name: String,
    /// Uncompressed byte length
    pub original: u64,
    /// Gzip-compressed byte length
    pub gzip: u64,
    /// Brotli-compressed byte length
    pub brotli: u64,
    /// Set when no prior measurement existed for this name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<bool>,
}

/// All artifact measurements recorded for one revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Revision identifier
    pub id: String,
    /// Measurements, unique by artifact name, in recording order
    pub sizes: Vec<ArtifactSize>,
}

impl Snapshot {
    /// Create an empty snapshot for a revision
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sizes: Vec::new(),
        }
    }

    /// Look up a measurement by artifact name
    pub fn get(&self, name: &str) -> Option<&ArtifactSize> {
        self.sizes.iter().find(|size| size.name == name)
    }

    /// Record a measurement, enforcing the overwrite policy.
    ///
    /// An unseen name is appended. A duplicate name replaces the existing
    /// entry at the same positional index when `overwrite` is set, and
    /// fails with [`SizewatchError::DuplicateMeasurement`] otherwise,
    /// leaving the snapshot untouched.
    pub fn record(&mut self, size: ArtifactSize, overwrite: bool) -> Result<(), SizewatchError> {
        match self.sizes.iter().position(|s| s.name == size.name) {
            Some(index) if overwrite => {
                self.sizes[index] = size;
                Ok(())
            }
            Some(_) => Err(SizewatchError::DuplicateMeasurement {
                name: size.name,
                revision: self.id.clone(),
            }),
            None => {
                self.sizes.push(size);
                Ok(())
            }
        }
    }
}
