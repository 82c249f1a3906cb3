//! Error types for display queries.

use crate::screen::MonitorHandle;
use thiserror::Error;

/// Result type alias for multiscreen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying displays.
#[derive(Debug, Error)]
pub enum Error {
    /// The monitor handle no longer refers to an attached display.
    ///
    /// Usually a race with monitor hot-plug; re-enumerate and try again.
    #[error("no such monitor: {0}")]
    NoSuchMonitor(MonitorHandle),

    /// The platform cannot report DPI through this query.
    #[error("DPI query unavailable: {0}")]
    DpiQueryUnavailable(String),

    /// Platform-specific error.
    #[error("platform error: {0}")]
    Platform(String),

    /// The requested feature is not supported on this platform.
    #[error("not supported: {0}")]
    NotSupported(String),
}
