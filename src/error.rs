//! Error types for the CDP CLI configuration engine
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine operations
pub type CdpResult<T> = Result<T, CdpError>;

/// Main error type for configuration and argument resolution
#[derive(Error, Debug)]
pub enum CdpError {
    /// Malformed persisted INI file
    #[error("unable to parse config file {path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Malformed option declarations (packaging defect)
    #[error("invalid option schema: {message}")]
    Schema { message: String },

    /// Option value that does not coerce to the declared type
    #[error("invalid value '{value}' for --{option}: expected {expected}")]
    Type {
        option: String,
        value: String,
        expected: String,
    },

    /// Option value outside the declared choices
    #[error("invalid choice '{value}' for --{option} (choose from {})", .choices.join(", "))]
    Choice {
        option: String,
        value: String,
        choices: Vec<String>,
    },

    /// Qualified name that resolves to an empty key
    #[error("ambiguous configuration name '{name}': no key after the section address")]
    AmbiguousName { name: String },

    /// Key or section name the INI format cannot carry
    #[error("invalid configuration name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Could not take the advisory lock guarding a store file
    #[error("unable to lock {path}: {message}")]
    Lock { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CdpError {
    /// Attach a file path to a parse error produced from in-memory text.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            CdpError::Parse { line, message, .. } => CdpError::Parse {
                path: path.into(),
                line,
                message,
            },
            other => other,
        }
    }
}
