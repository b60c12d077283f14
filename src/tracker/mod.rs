//! Artifact size tracking core
//!
//! This module owns the snapshot/history data model and the diffing logic:
//! how a new measurement is reconciled against prior history, how
//! "previous" is determined when the same revision is measured twice, and
//! how overwrite/append semantics are resolved. [`SizeTracker`] wires the
//! pieces together behind the per-artifact hook a build pipeline calls.

mod diff;
mod history;
mod measure;
mod reporter;
mod snapshot;
mod store;

pub use diff::{diff, SizeDelta};
pub use history::{Resolution, SizeHistory};
pub use measure::measure;
pub use reporter::SizeReporter;
pub use snapshot::{ArtifactSize, Snapshot};
pub use store::{SizeStore, DEFAULT_STORE_FILE};

use anyhow::{Context, Result};
use console::style;
use log::debug;
use std::path::PathBuf;

use crate::config::TrackerOptions;
use crate::fmt::WARNING;
use crate::git::GitRepository;
use crate::infra::{CommandExecutor, FileSystem, RealFileSystem};

/// Size tracking manager — the host-facing hook surface.
///
/// One tracker is created per build. The history is loaded and the
/// previous/current snapshot slots resolved once at construction; each
/// generated artifact is then fed through [`SizeTracker::record_asset`],
/// and [`SizeTracker::finish`] persists the updated history (or warns when
/// writing is disabled). The tracker exclusively owns its history for the
/// duration of the build.
pub struct SizeTracker<FS: FileSystem = RealFileSystem> {
    store: SizeStore<FS>,
    history: SizeHistory,
    slots: Resolution,
    revision: String,
    overwrite: bool,
    write: bool,
    reporter: SizeReporter,
}

impl SizeTracker<RealFileSystem> {
    /// Create a tracker with the real filesystem and git collaborators
    pub fn new(options: TrackerOptions) -> Result<Self> {
        Self::with_collaborators(options, RealFileSystem, &GitRepository::new())
    }
}

impl<FS: FileSystem> SizeTracker<FS> {
    /// Create a tracker with injected collaborators (for testing).
    ///
    /// The git collaborator is only consulted for settings the options
    /// leave unset: the revision id (short commit hash) and the write
    /// policy (true only on a clean working tree; disabled when no
    /// repository is available).
    pub fn with_collaborators<CE: CommandExecutor>(
        options: TrackerOptions,
        fs: FS,
        git: &GitRepository<CE>,
    ) -> Result<Self> {
        let revision = match options.id {
            Some(id) => id,
            None => git
                .short_commit_hash()?
                .context("No revision id: not inside a git repository and no explicit id configured")?,
        };

        let write = match options.write {
            Some(write) => write,
            None => git.is_working_tree_clean()?.unwrap_or(false),
        };

        let path = options
            .path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));
        let store = SizeStore::with_fs(path, fs);

        let mut history = store.load()?;
        let slots = history.resolve(&revision);
        debug!(
            "tracking revision {} (previous: {:?})",
            revision, slots.previous
        );

        Ok(Self {
            store,
            history,
            slots,
            revision,
            overwrite: options.overwrite,
            write,
            reporter: SizeReporter::new(options.emoji),
        })
    }

    /// Revision id the current snapshot is keyed by
    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// True when [`SizeTracker::finish`] will persist to disk
    pub fn will_write(&self) -> bool {
        self.write
    }

    /// Recorded history, current build included
    pub fn history(&self) -> &SizeHistory {
        &self.history
    }

    /// Measure one generated artifact and record it.
    ///
    /// This is the per-artifact build hook: the content is measured,
    /// recorded into the current snapshot under the overwrite policy,
    /// diffed against the previous snapshot, and reported on stdout. The
    /// computed delta is returned for callers that want it.
    pub fn record_asset(&mut self, name: &str, content: &[u8]) -> Result<SizeDelta> {
        let size = measure(name, content)?;

        self.history
            .snapshot_mut(self.slots.current)
            .record(size.clone(), self.overwrite)?;

        let previous = self.slots.previous.map(|index| self.history.snapshot(index));
        let delta = diff(previous, &size);

        println!("{}", self.reporter.format_line(&size, &delta));
        Ok(delta)
    }

    /// Persist the updated history, or warn when writing is disabled.
    ///
    /// Skipping the write is a policy outcome, not an error; the build
    /// proceeds normally either way.
    pub fn finish(&self) -> Result<()> {
        if self.write {
            self.store.save(&self.history)
        } else {
            eprintln!(
                "{} {}",
                WARNING,
                style("sizewatch: writing disabled, size store not updated").yellow()
            );
            Ok(())
        }
    }
}
