use std::error::Error;
use std::fmt;

/// Error types for newsmig operations
#[derive(Debug)]
pub enum MigrateError {
    /// Configuration error
    Config(String),
    /// Export data error (unreadable or malformed input)
    Export(String),
    /// Media library error
    Media(String),
    /// Blog store error
    Store(String),
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrateError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MigrateError::Export(msg) => write!(f, "Export error: {}", msg),
            MigrateError::Media(msg) => write!(f, "Media library error: {}", msg),
            MigrateError::Store(msg) => write!(f, "Blog store error: {}", msg),
        }
    }
}

impl Error for MigrateError {}
