//! Per-file analysis output

use serde::{Deserialize, Serialize};

/// Structural summary of one source file.
///
/// `path` is relative to the scan root and always uses `/` separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    pub line_count: usize,
    /// Module specifiers in source order, duplicates kept
    pub imports: Vec<String>,
    pub classes: Vec<ClassRecord>,
    pub functions: Vec<String>,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, line_count: usize) -> Self {
        Self {
            path: path.into(),
            line_count,
            imports: Vec::new(),
            classes: Vec::new(),
            functions: Vec::new(),
        }
    }
}

/// A top-level class declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    /// Zero or one superclass identifier
    pub bases: Vec<String>,
    /// Method names in declaration order
    pub methods: Vec<String>,
}

/// A file that was selected for analysis but could not be read or parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisError {
    pub path: String,
    pub reason: String,
}

impl AnalysisError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}
