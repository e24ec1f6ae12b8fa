//! archwalker - architectural overview of JavaScript and TypeScript projects
//!
//! Walks a project directory (honoring `.gitignore` and a set of excluded
//! directory names), parses every JS/TS source with OXC, and groups per-file
//! structure (imports, top-level classes and functions, line counts) into
//! per-directory modules. The result renders as a plain-text report, JSON or
//! CSV.
//!
//! ```no_run
//! use archwalker::{generate_report, Settings};
//!
//! let text = generate_report(&Settings::for_path("./my-project"))?;
//! println!("{}", text);
//! # Ok::<(), archwalker::WalkerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;
pub mod vcs;

// Re-export commonly used types
pub use crate::core::{generate_report, CancelToken, DirectoryWalker, PathFilter, Scanner};
pub use error::{handle_error, try_with_recovery, ErrorSeverity, Result, WalkerError};
pub use models::{
    AnalysisError, ClassRecord, FileRecord, ModuleSummary, OutputFormat, ProjectReport, Settings,
    VcsInfo,
};
pub use output::render_report;
pub use parsers::{GitIgnoreMatcher, SourceAnalyzer};
pub use vcs::{GitProvider, NoVcs, VcsProvider};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
