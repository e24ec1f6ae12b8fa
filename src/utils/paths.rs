//! Root-relative path helpers
//!
//! Everything downstream of the walker (ignore matching, module keys, report
//! text) works on `/`-separated strings relative to the scan root.

use std::path::{Component, Path};

/// Key used for files that sit directly in the scan root
pub const ROOT_MODULE: &str = ".";

/// Join the normal components of `path` with `/`.
///
/// `.` components are dropped; anything else that is not a plain name
/// (prefixes, root, `..`) is kept as its lossy string form.
pub fn to_slash(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
            Component::ParentDir => parts.push("..".to_string()),
            Component::RootDir | Component::Prefix(_) => {}
        }
    }
    parts.join("/")
}

/// `path` relative to `root`, `/`-separated. Empty when `path == root`.
///
/// Returns `None` if `path` is not under `root`.
pub fn relative_to(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(to_slash)
}

/// Module key (containing directory) for a root-relative file path
pub fn module_key(relative_file: &str) -> String {
    match relative_file.rfind('/') {
        Some(idx) => relative_file[..idx].to_string(),
        None => ROOT_MODULE.to_string(),
    }
}

/// Iterate the `/`-separated segments of a root-relative path
pub fn segments(relative: &str) -> impl Iterator<Item = &str> {
    relative.split('/').filter(|s| !s.is_empty() && *s != ".")
}
