use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between argument problems
/// and failures that happened while producing the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the dashboard was rendered (possibly from a stale cache)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the status dashboard.
///
/// Network and payload problems are swallowed by the controller (the
/// dashboard degrades to its cached rendering); these variants only reach
/// the user when they come from the CLI shell itself.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to parse inventory payload: {details}\n\n💡 Hint: The /all_packages endpoint must return a JSON object keyed by \"<name>=<version>\"")]
    PayloadParseError { details: String },

    #[error("Inventory endpoint {url} returned status code {status}")]
    EndpointStatus { url: String, status: u16 },

    #[error("Failed to access cache entry '{key}' in {dir}\nDetails: {details}\n\n💡 Hint: Please verify that the cache directory is writable")]
    CacheError {
        key: String,
        dir: PathBuf,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid cache directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid directory with --cache-dir")]
    InvalidCacheDir { path: PathBuf, reason: String },

    /// Validation error for builder patterns and interactive commands
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
