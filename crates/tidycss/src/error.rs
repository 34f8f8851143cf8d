//! Error types for the parser wrappers.
//!
//! Parsing itself never fails: malformed CSS produces diagnostics, not
//! errors. These variants cover the surfaces around it.

use std::path::PathBuf;

/// Result type alias for tidycss operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the lexer proper.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be deserialized.
    #[error("Invalid parser configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configured CSS level is not present in the data tables.
    #[error("Unknown CSS level '{0}'")]
    UnknownLevel(String),

    /// A cancellable parse was stopped by its caller.
    #[error("Parse cancelled at line {line}")]
    Cancelled { line: u32 },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown-level error.
    pub fn unknown_level(level: impl Into<String>) -> Self {
        Self::UnknownLevel(level.into())
    }
}
