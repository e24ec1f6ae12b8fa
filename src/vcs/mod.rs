//! Version control metadata for the report header
//!
//! The scanner only needs three strings from the repository enclosing the
//! scan root. Providers are swappable so tests and `--no-vcs` runs never touch
//! a real repository.

use std::path::Path;

use git2::Repository;

use crate::error::{Result, WalkerError};
use crate::models::report::VcsInfo;

/// Source of branch and last-commit details
pub trait VcsProvider: Send + Sync {
    /// Describe the repository containing `root`.
    ///
    /// Any failure (no repository, unborn HEAD, unreadable objects) is a
    /// [`WalkerError::Vcs`]; callers treat it as "no VCS info".
    fn describe(&self, root: &Path) -> Result<VcsInfo>;

    /// Provider name for log messages
    fn name(&self) -> &str;
}

/// Reads the repository through libgit2
#[derive(Debug, Default, Clone, Copy)]
pub struct GitProvider;

impl GitProvider {
    pub fn new() -> Self {
        Self
    }
}

impl VcsProvider for GitProvider {
    fn describe(&self, root: &Path) -> Result<VcsInfo> {
        let repo = Repository::discover(root)?;
        let head = repo.head()?;

        let branch = if repo.head_detached().unwrap_or(false) {
            "HEAD".to_string()
        } else {
            head.shorthand().unwrap_or("HEAD").to_string()
        };

        let commit = head.peel_to_commit()?;
        let last_commit_message = commit.message().unwrap_or("").trim().to_string();
        let author = commit.author();
        let author_name = author.name().unwrap_or("").to_string();

        tracing::debug!("git: branch {} in {}", branch, repo.path().display());

        Ok(VcsInfo {
            branch,
            last_commit_message,
            author_name,
        })
    }

    fn name(&self) -> &str {
        "git"
    }
}

/// Provider that never finds a repository
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVcs;

impl VcsProvider for NoVcs {
    fn describe(&self, _root: &Path) -> Result<VcsInfo> {
        Err(WalkerError::vcs_error("version control lookup disabled"))
    }

    fn name(&self) -> &str {
        "none"
    }
}
