//! Git metadata utilities for revision tracking

use crate::infra::{CommandExecutor, RealCommandExecutor};
use thiserror::Error;

/// Git operation errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command failed with an error message
    #[error("Git command failed: {0}")]
    CommandFailed(String),

    /// Git output contained invalid UTF-8
    #[error("Invalid UTF-8 in git output")]
    InvalidUtf8,

    /// IO error occurred while executing git command
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Git repository interface with dependency injection for testability
pub struct GitRepository<CE: CommandExecutor = RealCommandExecutor> {
    cmd_executor: CE,
}

impl GitRepository<RealCommandExecutor> {
    /// Create a new GitRepository with real command execution
    pub fn new() -> Self {
        Self {
            cmd_executor: RealCommandExecutor,
        }
    }
}

impl Default for GitRepository<RealCommandExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<CE: CommandExecutor> GitRepository<CE> {
    /// Create a GitRepository with a custom command executor (for testing)
    pub fn with_executor(cmd_executor: CE) -> Self {
        Self { cmd_executor }
    }

    /// Get the current commit hash in short form.
    ///
    /// Returns `Ok(Some(hash))` if in a git repository,
    /// `Ok(None)` if not in a git repository or git is not installed,
    /// `Err(GitError)` if the git command fails unexpectedly.
    pub fn short_commit_hash(&self) -> Result<Option<String>, GitError> {
        let output = match self
            .cmd_executor
            .execute(|cmd| cmd.args(["rev-parse", "--short", "HEAD"]), "git")
        {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Git command not found
                return Ok(None);
            }
            Err(e) => return Err(GitError::Io(e)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("not a git repository") {
                return Ok(None);
            }
            return Err(GitError::CommandFailed(stderr.to_string()));
        }

        let hash = String::from_utf8(output.stdout)
            .map_err(|_| GitError::InvalidUtf8)?
            .trim()
            .to_string();

        Ok(Some(hash))
    }

    /// Check whether the working tree has no uncommitted changes.
    ///
    /// Returns `Ok(Some(true))` on a clean tree, `Ok(Some(false))` when
    /// `git status --porcelain` reports pending changes, `Ok(None)` if not
    /// in a git repository or git is not installed, `Err(GitError)` if the
    /// git command fails unexpectedly.
    pub fn is_working_tree_clean(&self) -> Result<Option<bool>, GitError> {
        let output = match self
            .cmd_executor
            .execute(|cmd| cmd.args(["status", "--porcelain"]), "git")
        {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(None);
            }
            Err(e) => return Err(GitError::Io(e)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("not a git repository") {
                return Ok(None);
            }
            return Err(GitError::CommandFailed(stderr.to_string()));
        }

        let status = String::from_utf8(output.stdout).map_err(|_| GitError::InvalidUtf8)?;

        Ok(Some(status.trim().is_empty()))
    }
}
