//! Error types for the dewfiles library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dewfiles operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the dewfiles library
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Settings Document Errors
    // -------------------------------------------------------------------------
    #[error("Settings document not found at '{0}'")]
    DocumentNotFound(PathBuf),

    #[error("Setting not found: {0}")]
    SettingNotFound(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize value: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to parse settings document: {0}")]
    Parse(String),

    #[error("Failed to deserialize setting '{key}': {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    // -------------------------------------------------------------------------
    // Platform Errors
    // -------------------------------------------------------------------------
    #[error("No application data directory is available on this platform")]
    DataDirUnavailable,
}

impl Error {
    /// Check if this is a "not found" type error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::DocumentNotFound(_) | Error::SettingNotFound(_) => true,
            Error::FileRead { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
