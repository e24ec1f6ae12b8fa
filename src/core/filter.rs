//! Inclusion decisions for files and directories
//!
//! [`PathFilter`] is built once per scan and is read-only afterwards, so it is
//! shared across analysis threads behind an `Arc` without locking.

use std::collections::HashSet;
use std::path::Path;

use crate::parsers::gitignore::GitIgnoreMatcher;
use crate::utils::paths::{relative_to, segments, to_slash};

/// Directory names that are always pruned
pub const DEFAULT_EXCLUDED_DIRS: [&str; 6] =
    ["node_modules", "dist", "build", ".git", "venv", "__pycache__"];

/// Extensions that are always analyzed
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".ts", ".tsx"];

/// Lowercase an extension and make sure it starts with a dot
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

#[derive(Debug, Clone)]
pub struct PathFilter {
    excluded_dirs: HashSet<String>,
    extensions: HashSet<String>,
    ignore: GitIgnoreMatcher,
}

impl PathFilter {
    /// Filter with the built-in defaults plus the given additions
    pub fn new<D, E>(extra_dirs: D, extra_extensions: E, ignore: GitIgnoreMatcher) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let mut excluded_dirs: HashSet<String> =
            DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect();
        excluded_dirs.extend(
            extra_dirs
                .into_iter()
                .map(|d| d.as_ref().trim().to_string())
                .filter(|d| !d.is_empty()),
        );

        let mut extensions: HashSet<String> =
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();
        extensions.extend(
            extra_extensions
                .into_iter()
                .map(|e| e.as_ref().trim().to_string())
                .filter(|e| !e.trim_start_matches('.').is_empty())
                .map(|e| normalize_extension(&e)),
        );

        Self {
            excluded_dirs,
            extensions,
            ignore,
        }
    }

    /// Filter with only the built-in defaults and no ignore rules
    pub fn with_defaults() -> Self {
        Self::new(
            std::iter::empty::<&str>(),
            std::iter::empty::<&str>(),
            GitIgnoreMatcher::empty(),
        )
    }

    /// True if any segment of the root-relative `relative` path is an excluded name
    pub fn is_excluded_dir(&self, relative: &str) -> bool {
        segments(relative).any(|segment| self.excluded_dirs.contains(segment))
    }

    /// Ignore-file verdict for `path` under `root`.
    ///
    /// Paths outside `root` are never ignored; neither is anything when no
    /// ignore rules were loaded.
    pub fn is_ignored(&self, path: &Path, root: &Path, is_dir: bool) -> bool {
        if self.ignore.is_empty() {
            return false;
        }
        match relative_to(path, root) {
            Some(relative) => self.ignore.is_ignored(&relative, is_dir),
            None => false,
        }
    }

    /// Case-insensitive extension check
    pub fn is_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.contains(&normalize_extension(ext)))
            .unwrap_or(false)
    }

    /// File test: not excluded, not ignored, allowed extension
    pub fn should_include(&self, path: &Path, root: &Path) -> bool {
        let relative = match relative_to(path, root) {
            Some(relative) => relative,
            None => to_slash(path),
        };
        !self.is_excluded_dir(&relative)
            && !self.ignore.is_ignored(&relative, false)
            && self.is_allowed_extension(path)
    }

    /// Directory test: not excluded, not ignored
    pub fn should_include_dir(&self, path: &Path, root: &Path) -> bool {
        let relative = match relative_to(path, root) {
            Some(relative) => relative,
            None => to_slash(path),
        };
        !self.is_excluded_dir(&relative) && !self.ignore.is_ignored(&relative, true)
    }

    /// Effective extension set, sorted
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.extensions.iter().cloned().collect();
        extensions.sort();
        extensions
    }

    /// Effective excluded-directory set, sorted
    pub fn excluded_dirs(&self) -> Vec<String> {
        let mut dirs: Vec<String> = self.excluded_dirs.iter().cloned().collect();
        dirs.sort();
        dirs
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
