//! Track command implementation
//!
//! Handles the `sizewatch track` command which measures the given artifact
//! files, records them into the size store under the current revision, and
//! prints the delta against the previous snapshot.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::TrackerOptions;
use crate::tracker::SizeTracker;

/// Measure artifact files and record them into the size store.
///
/// Files are read whole and measured by their encoded byte length; the
/// artifact name recorded is the file name without its directory.
///
/// # Errors
///
/// Returns an error if an artifact file cannot be read, the store is
/// corrupt, a duplicate measurement is recorded without `overwrite`, or no
/// revision id can be resolved.
pub fn cmd_track(
    files: &[String],
    path: Option<&str>,
    id: Option<&str>,
    overwrite: bool,
    write: Option<bool>,
    emoji: bool,
) -> Result<()> {
    let options = TrackerOptions {
        path: path.map(Into::into),
        overwrite,
        emoji,
        write,
        id: id.map(Into::into),
    };
    let mut tracker = SizeTracker::new(options)?;

    for file in files {
        let content =
            fs::read(file).with_context(|| format!("Failed to read artifact {}", file))?;
        tracker.record_asset(&artifact_name(file), &content)?;
    }

    tracker.finish()
}

fn artifact_name(file: &str) -> String {
    Path::new(file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}
