//! Error handling for archwalker
//!
//! Error types, the crate-wide result alias and severity-based recovery.

pub mod context;
pub mod types;

pub use context::{handle_error, try_with_recovery};
pub use types::{ErrorSeverity, Result, WalkerError};
