//! Size history persistence (I/O)

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use super::history::SizeHistory;
use crate::error::SizewatchError;
use crate::infra::{FileSystem, RealFileSystem};

/// Well-known store filename in the working directory
pub const DEFAULT_STORE_FILE: &str = "sizewatch.json";

/// Handles history persistence at a fixed path
pub struct SizeStore<FS: FileSystem = RealFileSystem> {
    path: PathBuf,
    fs: FS,
}

impl SizeStore<RealFileSystem> {
    /// Create a store backed by the real filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, RealFileSystem)
    }
}

impl<FS: FileSystem> SizeStore<FS> {
    /// Create a store with a custom filesystem implementation
    pub fn with_fs(path: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    /// Path the history is persisted at
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the recorded history.
    ///
    /// A missing file is created holding the empty-history document and the
    /// empty history returned. Unparseable content fails with
    /// [`SizewatchError::CorruptStore`]; recovering by deleting the file is
    /// a user decision, not a default.
    pub fn load(&self) -> Result<SizeHistory> {
        if !self.path.exists() {
            debug!("size store {} missing, creating empty", self.path.display());
            let empty = SizeHistory::new();
            self.write_document(&empty)?;
            return Ok(empty);
        }

        let contents = self.fs.read_to_string(&self.path).map_err(|source| {
            SizewatchError::Io {
                context: format!("reading size store {}", self.path.display()),
                source,
            }
        })?;

        let history: SizeHistory =
            serde_json::from_str(&contents).map_err(|source| SizewatchError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "loaded {} snapshot(s) from {}",
            history.len(),
            self.path.display()
        );
        Ok(history)
    }

    /// Persist the history, replacing the whole document in one write
    pub fn save(&self, history: &SizeHistory) -> Result<()> {
        self.write_document(history)?;
        debug!(
            "saved {} snapshot(s) to {}",
            history.len(),
            self.path.display()
        );
        Ok(())
    }

    fn write_document(&self, history: &SizeHistory) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs
                .create_dir_all(parent)
                .context("Failed to create size store directory")?;
        }

        let contents =
            serde_json::to_string_pretty(history).context("Failed to serialize size history")?;

        self.fs
            .write(&self.path, contents)
            .map_err(|source| SizewatchError::Io {
                context: format!("writing size store {}", self.path.display()),
                source,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::snapshot::ArtifactSize;
    use std::fs;
    use tempfile::TempDir;

    fn sample_history() -> SizeHistory {
        let mut history = SizeHistory::new();
        let slots = history.resolve("abc123");
        history
            .snapshot_mut(slots.current)
            .record(
                ArtifactSize {
                    name: "bundle.js".to_string(),
                    original: 1000,
                    gzip: 400,
                    brotli: 350,
                    new: None,
                },
                false,
            )
            .unwrap();
        history
    }

    #[test]
    fn test_load_creates_missing_store_with_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sizewatch.json");
        let store = SizeStore::new(&path);

        let history = store.load().unwrap();

        assert!(history.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_save_and_load_round_trips_history() {
        let temp_dir = TempDir::new().unwrap();
        let store = SizeStore::new(temp_dir.path().join("sizewatch.json"));

        let history = sample_history();
        store.save(&history).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, history);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("sizes.json");
        let store = SizeStore::new(&path);

        store.save(&sample_history()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_load_with_corrupt_content_fails_without_repair() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sizewatch.json");
        fs::write(&path, "{not a history").unwrap();

        let store = SizeStore::new(&path);
        let err = store.load().expect_err("corrupt store should fail");

        let tracker_err = err
            .downcast_ref::<SizewatchError>()
            .expect("should be a typed error");
        assert!(matches!(
            tracker_err,
            SizewatchError::CorruptStore { .. }
        ));
        // No silent recovery: the file is left as-is for the user to remove
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not a history");
    }

    #[test]
    fn test_load_with_wrong_shape_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sizewatch.json");
        // Valid JSON, but an object rather than the snapshot array
        fs::write(&path, "{\"records\": []}").unwrap();

        let store = SizeStore::new(&path);
        let err = store.load().expect_err("wrong shape should fail");
        assert!(err
            .downcast_ref::<SizewatchError>()
            .is_some_and(|e| matches!(e, SizewatchError::CorruptStore { .. })));
    }

    #[test]
    fn test_load_accepts_stored_new_flags() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sizewatch.json");
        fs::write(
            &path,
            r#"[{"id":"abc123","sizes":[{"name":"bundle.js","original":1000,"gzip":400,"brotli":350,"new":true}]}]"#,
        )
        .unwrap();

        let store = SizeStore::new(&path);
        let history = store.load().unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(
            history.snapshot(0).get("bundle.js").unwrap().new,
            Some(true)
        );
    }

    #[test]
    fn test_save_replaces_previous_document_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let store = SizeStore::new(temp_dir.path().join("sizewatch.json"));

        store.save(&sample_history()).unwrap();

        let mut second = SizeHistory::new();
        second.resolve("def456");
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.snapshot(0).id, "def456");
    }

    #[test]
    fn test_multiple_save_load_cycles_preserve_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = SizeStore::new(temp_dir.path().join("sizewatch.json"));

        let mut history = store.load().unwrap();
        history.resolve("a1");
        store.save(&history).unwrap();

        let mut history = store.load().unwrap();
        history.resolve("b2");
        store.save(&history).unwrap();

        let final_history = store.load().unwrap();
        let ids: Vec<_> = final_history.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "b2"]);
    }
}
