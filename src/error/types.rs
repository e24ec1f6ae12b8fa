//! Error types and definitions for archwalker
//!
//! Every failure the scanner can hit is a variant of [`WalkerError`]. Per-file
//! failures are normally converted into [`crate::models::AnalysisError`] data
//! before they reach the caller; the variants here cover what surfaces as `Err`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for archwalker operations
#[derive(Debug, Error)]
pub enum WalkerError {
    /// The scan root does not exist or is not a directory
    #[error("Root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// The scan root exists but cannot be listed
    #[error("Root directory {path} is not readable: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Ignore file exists but could not be read
    #[error("Could not read ignore file {path}: {source}")]
    IgnoreSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be read
    #[error("Error reading {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be parsed
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// Version control metadata unavailable
    #[error("Could not retrieve Git information: {message}")]
    Vcs { message: String },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV serialization error
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Scan cancelled or deadline exceeded
    #[error("Operation interrupted")]
    Interrupted,
}

impl WalkerError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            WalkerError::IgnoreSource { .. } => ErrorSeverity::Warning,
            WalkerError::FileRead { .. } => ErrorSeverity::Warning,
            WalkerError::Parse { .. } => ErrorSeverity::Warning,
            WalkerError::DirectoryTraversal { .. } => ErrorSeverity::Warning,
            WalkerError::Vcs { .. } => ErrorSeverity::Warning,
            WalkerError::PermissionDenied { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            WalkerError::RootNotFound { .. } => ErrorSeverity::Critical,
            WalkerError::RootUnreadable { .. } => ErrorSeverity::Critical,
            WalkerError::Config { .. } => ErrorSeverity::Critical,
            WalkerError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            WalkerError::ConfigRead { .. } => ErrorSeverity::Critical,
            WalkerError::ConfigParse { .. } => ErrorSeverity::Critical,
            WalkerError::StdoutWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            WalkerError::RootNotFound { path } => {
                format!("Directory '{}' does not exist or is not a directory. Please provide a valid project path.", path.display())
            }
            WalkerError::RootUnreadable { path, source } => {
                format!("Cannot list '{}': {}. Check directory permissions.", path.display(), source)
            }
            WalkerError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            WalkerError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            WalkerError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create one with --init or use command line options.", path.display())
            }
            WalkerError::Vcs { .. } => "Could not retrieve Git information.".to_string(),
            WalkerError::Interrupted => {
                "The scan was cancelled before it finished. Increase --timeout or scan a smaller directory.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        WalkerError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        WalkerError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        WalkerError::PermissionDenied { path: path.into() }
    }

    /// Create a parse error for a single file
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        WalkerError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        WalkerError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a version control error
    pub fn vcs_error(message: impl Into<String>) -> Self {
        WalkerError::Vcs {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for WalkerError {
    fn from(err: std::io::Error) -> Self {
        WalkerError::io_error(err)
    }
}

impl From<csv::Error> for WalkerError {
    fn from(err: csv::Error) -> Self {
        WalkerError::Csv { source: err }
    }
}

impl From<serde_json::Error> for WalkerError {
    fn from(err: serde_json::Error) -> Self {
        WalkerError::JsonSerialize { source: err }
    }
}

impl From<git2::Error> for WalkerError {
    fn from(err: git2::Error) -> Self {
        WalkerError::vcs_error(err.message())
    }
}

/// Result type alias for archwalker operations
pub type Result<T> = std::result::Result<T, WalkerError>;
