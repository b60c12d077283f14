#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! sizewatch library
//!
//! This library provides the core functionality for tracking build
//! artifact sizes across commits. A build pipeline creates one
//! [`tracker::SizeTracker`] per build, feeds each generated artifact
//! through its hook, and gets a per-artifact report of the raw, gzip and
//! brotli byte sizes together with the delta against the previous
//! recorded snapshot. It can be used programmatically in addition to the
//! CLI interface.
//!
//! # Basic Example
//!
//! ```
//! use sizewatch::config::TrackerOptions;
//! use sizewatch::tracker::SizeTracker;
//! use tempfile::TempDir;
//!
//! let dir = TempDir::new().unwrap();
//! let options = TrackerOptions {
//!     path: Some(dir.path().join("sizewatch.json")),
//!     id: Some("abc123".to_string()),
//!     write: Some(true),
//!     ..TrackerOptions::default()
//! };
//!
//! let mut tracker = SizeTracker::new(options).unwrap();
//! let delta = tracker.record_asset("bundle.js", b"console.log(42);").unwrap();
//! assert!(delta.new);
//! assert_eq!(delta.original, 16);
//!
//! tracker.finish().unwrap();
//! ```
//!
//! # Advanced Example: diffing against an earlier revision
//!
//! Re-running against a new revision opens a fresh snapshot and diffs
//! each artifact against the previous one:
//!
//! ```
//! use sizewatch::config::TrackerOptions;
//! use sizewatch::tracker::SizeTracker;
//! use tempfile::TempDir;
//!
//! let dir = TempDir::new().unwrap();
//! let options = |id: &str| TrackerOptions {
//!     path: Some(dir.path().join("sizewatch.json")),
//!     id: Some(id.to_string()),
//!     write: Some(true),
//!     ..TrackerOptions::default()
//! };
//!
//! let mut tracker = SizeTracker::new(options("abc123")).unwrap();
//! tracker.record_asset("bundle.js", b"console.log(42);").unwrap();
//! tracker.finish().unwrap();
//!
//! let mut tracker = SizeTracker::new(options("def456")).unwrap();
//! let delta = tracker
//!     .record_asset("bundle.js", b"console.log(42); console.log(43);")
//!     .unwrap();
//! assert!(!delta.new);
//! assert_eq!(delta.original, 17);
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Per-instantiation tracker configuration
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Git metadata utilities
pub mod git;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Artifact size tracking core
pub mod tracker;
