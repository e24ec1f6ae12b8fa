//! Gitignore-style pattern matching
//!
//! Rules are compiled with `ignore::gitignore` and evaluated against
//! `/`-separated paths relative to the scan root. A path whose parent
//! directory is ignored stays ignored, whatever later rules say about it.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{Result, WalkerError};

/// Compiled ignore rules for one scan root
#[derive(Debug, Clone)]
pub struct GitIgnoreMatcher {
    rules: Gitignore,
}

impl Default for GitIgnoreMatcher {
    fn default() -> Self {
        Self {
            rules: Gitignore::empty(),
        }
    }
}

impl GitIgnoreMatcher {
    /// A matcher that never ignores anything
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile ignore-file text. Never fails; lines that do not compile are skipped.
    pub fn from_text(text: &str) -> Self {
        let mut builder = GitignoreBuilder::new(".");
        for line in text.lines() {
            if let Err(err) = builder.add_line(None, line) {
                tracing::debug!("skipping ignore pattern {:?}: {}", line, err);
            }
        }

        match builder.build() {
            Ok(rules) => Self { rules },
            Err(err) => {
                tracing::warn!("could not compile ignore rules: {}", err);
                Self::empty()
            }
        }
    }

    /// Load `file_name` from `root`.
    ///
    /// A missing file yields an empty matcher. Any other read failure is
    /// returned as [`WalkerError::IgnoreSource`] so the caller can warn and
    /// fall back to [`GitIgnoreMatcher::empty`].
    pub fn load(root: &Path, file_name: &str) -> Result<Self> {
        let path = root.join(file_name);
        match fs::read(&path) {
            Ok(bytes) => {
                let matcher = Self::from_text(&String::from_utf8_lossy(&bytes));
                tracing::debug!("loaded {} ignore rules from {}", matcher.len(), path.display());
                Ok(matcher)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::empty()),
            Err(source) => Err(WalkerError::IgnoreSource { path, source }),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether the root-relative `path` is ignored.
    ///
    /// Every ancestor directory is tested first; an ignored ancestor ignores
    /// the whole subtree, so a negated rule cannot reach inside it.
    pub fn is_ignored(&self, path: &str, is_dir: bool) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let path = path.trim_matches('/');
        if path.is_empty() {
            return false;
        }

        let mut end = 0;
        while let Some(offset) = path[end..].find('/') {
            end += offset;
            if self.rules.matched(&path[..end], true).is_ignore() {
                return true;
            }
            end += 1;
        }

        self.rules.matched(path, is_dir).is_ignore()
    }
}
