//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for archwalker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Project root to scan
    pub scan_path: PathBuf,

    /// Directory names pruned in addition to the built-in set
    pub excluded_directories: Vec<String>,

    /// File extensions analyzed in addition to the built-in set
    pub file_extensions: Vec<String>,

    /// Name of the ignore file looked up in the scan root
    pub ignore_file: String,

    /// Whether to honor the ignore file at all
    pub use_ignore_file: bool,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Whether to put branch and last commit in the report header
    pub include_vcs_info: bool,

    /// Whether to analyze files on the rayon pool
    pub parallel: bool,

    /// Abandon the scan after this many seconds
    pub timeout_secs: Option<u64>,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in the terminal summary
    pub use_colors: bool,

    /// Whether to show progress bars
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            excluded_directories: Vec::new(),
            file_extensions: Vec::new(),
            ignore_file: ".gitignore".to_string(),
            use_ignore_file: true,
            max_depth: None,
            include_vcs_info: true,
            parallel: true,
            timeout_secs: None,
            output_format: OutputFormat::Text,
            output_file: None,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

impl Settings {
    /// Settings for scanning `path` with everything else left at its default
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            scan_path: path.into(),
            ..Self::default()
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The plain-text architectural report
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// One CSV row per analyzed file
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub excluded_directories: Option<Vec<String>>,
    pub file_extensions: Option<Vec<String>>,
    pub ignore_file: Option<String>,
    pub use_ignore_file: Option<bool>,
    pub max_depth: Option<usize>,
    pub include_vcs_info: Option<bool>,
    pub parallel: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Overlay `other` on top of `self`; any field `other` sets wins
    pub fn merge_from(&mut self, other: PartialSettings) {
        let base = std::mem::take(self);
        *self = PartialSettings {
            scan_path: other.scan_path.or(base.scan_path),
            excluded_directories: other.excluded_directories.or(base.excluded_directories),
            file_extensions: other.file_extensions.or(base.file_extensions),
            ignore_file: other.ignore_file.or(base.ignore_file),
            use_ignore_file: other.use_ignore_file.or(base.use_ignore_file),
            max_depth: other.max_depth.or(base.max_depth),
            include_vcs_info: other.include_vcs_info.or(base.include_vcs_info),
            parallel: other.parallel.or(base.parallel),
            timeout_secs: other.timeout_secs.or(base.timeout_secs),
            output_format: other.output_format.or(base.output_format),
            output_file: other.output_file.or(base.output_file),
            quiet: other.quiet.or(base.quiet),
            verbose: other.verbose.or(base.verbose),
            use_colors: other.use_colors.or(base.use_colors),
            show_progress: other.show_progress.or(base.show_progress),
        };
    }

    /// Resolve into full settings, falling back to [`Settings::default`] per field
    pub fn to_settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            scan_path: self.scan_path.clone().unwrap_or(defaults.scan_path),
            excluded_directories: self
                .excluded_directories
                .clone()
                .unwrap_or(defaults.excluded_directories),
            file_extensions: self.file_extensions.clone().unwrap_or(defaults.file_extensions),
            ignore_file: self.ignore_file.clone().unwrap_or(defaults.ignore_file),
            use_ignore_file: self.use_ignore_file.unwrap_or(defaults.use_ignore_file),
            max_depth: self.max_depth.or(defaults.max_depth),
            include_vcs_info: self.include_vcs_info.unwrap_or(defaults.include_vcs_info),
            parallel: self.parallel.unwrap_or(defaults.parallel),
            timeout_secs: self.timeout_secs.or(defaults.timeout_secs),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            output_file: self.output_file.clone().or(defaults.output_file),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
            show_progress: self.show_progress.unwrap_or(defaults.show_progress),
        }
    }
}
