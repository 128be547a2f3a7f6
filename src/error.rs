/*
 * Error type shared by every layer of the click pipeline. All variants are raised
 * before the host's event handler is called; once a dispatch has been issued there
 * is nothing left to report.
 */

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClickError {
    /// The stage singleton or its unit manager is missing (host not initialized).
    #[error("Host unavailable: {0}")]
    HostUnavailable(String),

    /// No window with the requested name/occurrence is currently registered.
    #[error("Target not found: {0}")]
    TargetNotFound(String),

    #[error("List index {index} is out of range (entry count {entry_count})")]
    IndexOutOfRange { index: i64, entry_count: i32 },

    /// A caller-supplied or resolved address is null.
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// A Win32 call made while resolving host bindings failed.
    #[cfg(target_os = "windows")]
    #[error("Platform error: {0}")]
    Platform(String),
}

#[cfg(target_os = "windows")]
impl From<windows::core::Error> for ClickError {
    fn from(err: windows::core::Error) -> Self {
        ClickError::Platform(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClickError>;
