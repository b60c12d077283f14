//! Command handlers for the sizewatch CLI
//!
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod log;
pub mod track;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use log::cmd_log;
pub use track::cmd_track;
