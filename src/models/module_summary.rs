//! Directory-level aggregation unit

use serde::{Deserialize, Serialize};

use super::file_record::FileRecord;

/// All analyzed files directly inside one directory.
///
/// `path` is the directory relative to the scan root, `"."` for the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub path: String,
    pub files: Vec<FileRecord>,
    pub total_lines: usize,
    pub total_files: usize,
}

impl ModuleSummary {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            files: Vec::new(),
            total_lines: 0,
            total_files: 0,
        }
    }

    /// Append a record and bump the running totals
    pub fn push(&mut self, record: FileRecord) {
        self.total_lines += record.line_count;
        self.total_files += 1;
        self.files.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
