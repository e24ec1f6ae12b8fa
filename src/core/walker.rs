//! Directory walking functionality
//!
//! Sorted, pruning, depth-first traversal built on `walkdir`. Excluded and
//! ignored directories are cut off in `filter_entry`, so their contents are
//! never listed at all.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::{DirEntry, WalkDir};

use crate::core::filter::PathFilter;
use crate::error::{Result, WalkerError};
use crate::utils::paths::{module_key, relative_to};

/// A file the walker decided is eligible for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Absolute (or root-joined) path used for reading
    pub path: PathBuf,
    /// `/`-separated path relative to the scan root
    pub relative: String,
}

impl WalkedFile {
    /// Containing directory key, `"."` for the root
    pub fn module(&self) -> String {
        module_key(&self.relative)
    }
}

/// Pre-order traversal of one root, driven by a [`PathFilter`]
#[derive(Debug, Clone)]
pub struct DirectoryWalker {
    root: PathBuf,
    filter: Arc<PathFilter>,
    max_depth: Option<usize>,
}

impl DirectoryWalker {
    pub fn new(root: impl Into<PathBuf>, filter: Arc<PathFilter>) -> Self {
        Self {
            root: root.into(),
            filter,
            max_depth: None,
        }
    }

    /// Limit descent; depth 1 means only files directly in the root
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a fresh traversal.
    ///
    /// Each call is independent. Entries within a directory come in sorted
    /// file-name order. Symlinks are never followed and never yielded.
    /// Unreadable entries surface as `Err` items and the walk continues.
    pub fn walk(&self) -> impl Iterator<Item = Result<WalkedFile>> {
        let mut builder = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name();
        if let Some(depth) = self.max_depth {
            builder = builder.max_depth(depth);
        }

        let prune_root = self.root.clone();
        let prune_filter = Arc::clone(&self.filter);
        let root = self.root.clone();
        let filter = Arc::clone(&self.filter);

        builder
            .into_iter()
            .filter_entry(move |entry| keep_entry(entry, &prune_root, &prune_filter))
            .filter_map(move |item| match item {
                Ok(entry) => admit_file(entry, &root, &filter).map(Ok),
                Err(err) => Some(Err(traversal_error(err, &root))),
            })
    }
}

/// Pruning decision made before a directory is opened
fn keep_entry(entry: &DirEntry, root: &Path, filter: &PathFilter) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let keep = filter.should_include_dir(entry.path(), root);
    if !keep {
        tracing::debug!("pruning {}", entry.path().display());
    }
    keep
}

fn admit_file(entry: DirEntry, root: &Path, filter: &PathFilter) -> Option<WalkedFile> {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        tracing::debug!("skipping symlink {}", entry.path().display());
        return None;
    }
    if !file_type.is_file() || !filter.should_include(entry.path(), root) {
        return None;
    }

    let relative = relative_to(entry.path(), root)?;
    Some(WalkedFile {
        path: entry.into_path(),
        relative,
    })
}

fn traversal_error(err: walkdir::Error, root: &Path) -> WalkerError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());

    match err.io_error().map(|io| io.kind()) {
        Some(std::io::ErrorKind::PermissionDenied) => WalkerError::permission_denied(path),
        _ => WalkerError::directory_traversal_error(path, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::gitignore::GitIgnoreMatcher;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "// file\n").unwrap();
    }

    fn collect(walker: &DirectoryWalker) -> Vec<String> {
        walker.walk().map(|f| f.unwrap().relative).collect()
    }

    #[test]
    fn test_walk_is_sorted_pre_order() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "z.js");
        touch(dir.path(), "a.js");
        touch(dir.path(), "lib/b.ts");
        touch(dir.path(), "lib/a.ts");
        touch(dir.path(), "app/main.tsx");

        let walker = DirectoryWalker::new(dir.path(), Arc::new(PathFilter::with_defaults()));
        assert_eq!(
            collect(&walker),
            vec!["a.js", "app/main.tsx", "lib/a.ts", "lib/b.ts", "z.js"]
        );
    }

    #[test]
    fn test_walk_prunes_excluded_and_ignored_dirs() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "index.js");
        touch(dir.path(), "node_modules/react/index.js");
        touch(dir.path(), "src/build/out.js");
        touch(dir.path(), "coverage/report.js");

        let filter = PathFilter::new(
            std::iter::empty::<&str>(),
            std::iter::empty::<&str>(),
            GitIgnoreMatcher::from_text("coverage/\n"),
        );
        let walker = DirectoryWalker::new(dir.path(), Arc::new(filter));
        assert_eq!(collect(&walker), vec!["index.js"]);
    }

    #[test]
    fn test_walk_skips_disallowed_extensions() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.js");
        touch(dir.path(), "notes.md");
        touch(dir.path(), "b/empty.txt");

        let walker = DirectoryWalker::new(dir.path(), Arc::new(PathFilter::with_defaults()));
        assert_eq!(collect(&walker), vec!["a.js"]);
    }

    #[test]
    fn test_walk_respects_max_depth() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "top.js");
        touch(dir.path(), "one/mid.js");
        touch(dir.path(), "one/two/deep.js");

        let walker = DirectoryWalker::new(dir.path(), Arc::new(PathFilter::with_defaults()))
            .with_max_depth(Some(2));
        assert_eq!(collect(&walker), vec!["one/mid.js", "top.js"]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.js");
        touch(dir.path(), "b/c.js");

        let walker = DirectoryWalker::new(dir.path(), Arc::new(PathFilter::with_defaults()));
        let first = collect(&walker);
        let second = collect(&walker);
        assert_eq!(first, second);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_follow_symlinks() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "real/a.js");
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real/a.js"), dir.path().join("alias.js")).unwrap();

        let walker = DirectoryWalker::new(dir.path(), Arc::new(PathFilter::with_defaults()));
        assert_eq!(collect(&walker), vec!["real/a.js"]);
    }

    #[test]
    fn test_walked_file_module() {
        let file = WalkedFile {
            path: PathBuf::from("/p/src/a.js"),
            relative: "src/a.js".to_string(),
        };
        assert_eq!(file.module(), "src");
    }
}
