//! Core functionality for walking a project and analyzing its sources

pub mod aggregator;
pub mod cancel;
pub mod filter;
pub mod parallel;
pub mod scanner;
pub mod walker;

pub use aggregator::ModuleAggregator;
pub use cancel::CancelToken;
pub use filter::{PathFilter, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};
pub use parallel::ProgressUpdate;
pub use scanner::{generate_report, Scanner};
pub use walker::{DirectoryWalker, WalkedFile};
