//! Whole-project scan result

use serde::{Deserialize, Serialize};

use super::file_record::AnalysisError;
use super::module_summary::ModuleSummary;

/// Language family named in every report header
pub const LANGUAGES: [&str; 4] = ["JavaScript", "TypeScript", "JSX", "TSX"];

/// Branch and last-commit details for the report header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsInfo {
    pub branch: String,
    pub last_commit_message: String,
    pub author_name: String,
}

/// Everything a scan produced, in walk order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectReport {
    /// Root as the caller supplied it
    pub project_path: String,
    pub languages: Vec<String>,
    pub vcs: Option<VcsInfo>,
    pub total_files: usize,
    pub total_lines: usize,
    pub modules: Vec<ModuleSummary>,
    /// Files that were selected but failed to read or parse
    pub errors: Vec<AnalysisError>,
}

impl ProjectReport {
    /// Build a report from finished modules, deriving the project totals
    pub fn new(
        project_path: impl Into<String>,
        modules: Vec<ModuleSummary>,
        errors: Vec<AnalysisError>,
        vcs: Option<VcsInfo>,
    ) -> Self {
        let total_files = modules.iter().map(|m| m.total_files).sum();
        let total_lines = modules.iter().map(|m| m.total_lines).sum();

        Self {
            project_path: project_path.into(),
            languages: LANGUAGES.iter().map(|l| l.to_string()).collect(),
            vcs,
            total_files,
            total_lines,
            modules,
            errors,
        }
    }

    /// True when no file was analyzed successfully
    pub fn is_empty(&self) -> bool {
        self.total_files == 0
    }
}
