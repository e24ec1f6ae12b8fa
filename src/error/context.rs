//! Severity-driven recovery
//!
//! Optional lookups (ignore file, Git details) fail softly: the error is
//! logged at a level matching its severity and the scan carries on.

use crate::error::{ErrorSeverity, Result, WalkerError};

/// Log `err` by severity. Only critical errors are handed back.
pub fn handle_error(err: WalkerError) -> Option<WalkerError> {
    let message = err.user_message();

    match err.severity() {
        ErrorSeverity::Warning => {
            tracing::warn!("{}", message);
            None
        }
        ErrorSeverity::Error => {
            tracing::error!("{}", message);
            None
        }
        ErrorSeverity::Critical => {
            tracing::error!("critical: {}", message);
            Some(err)
        }
    }
}

/// Run `f`, turning non-critical failures into `Ok(None)`
pub fn try_with_recovery<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(err) => match handle_error(err) {
            Some(critical_err) => Err(critical_err),
            None => Ok(None),
        },
    }
}
