//! Per-instantiation tracker configuration

use std::path::PathBuf;

/// Options supplied once per tracker instantiation.
///
/// Unset fields fall back to documented defaults; `write` and `id` consult
/// the git collaborator when left unset, so a tracker built with both set
/// never shells out.
///
/// # Examples
///
/// ```
/// use sizewatch::config::TrackerOptions;
///
/// let options = TrackerOptions {
///     id: Some("abc123".to_string()),
///     overwrite: true,
///     ..TrackerOptions::default()
/// };
/// assert!(options.path.is_none());
/// assert!(options.emoji);
/// ```
#[derive(Debug, Clone)]
pub struct TrackerOptions {
    /// Store file path; defaults to `sizewatch.json` in the working directory
    pub path: Option<PathBuf>,
    /// Replace an existing measurement for (artifact, revision) instead of failing
    pub overwrite: bool,
    /// Pictographic labels in report output
    pub emoji: bool,
    /// Persist the updated history; defaults to true only on a clean working tree
    pub write: Option<bool>,
    /// Revision id for the current snapshot; defaults to the short commit hash
    pub id: Option<String>,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            path: None,
            overwrite: false,
            emoji: true,
            write: None,
            id: None,
        }
    }
}
