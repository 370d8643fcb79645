//! Error types and load result structures for the profile registry.

use std::path::PathBuf;

use folio_core::FolioError;

/// Errors that can occur while loading document profiles.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Profile validation error (empty name, bad export name).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Neither a registered name nor a readable YAML path.
    #[error("{0}")]
    NotFound(String),
}

impl From<ProfileError> for FolioError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::Io(io) => FolioError::Io(io),
            ProfileError::NotFound(msg) => FolioError::ProfileNotFound(msg),
            other => FolioError::Profile(other.to_string()),
        }
    }
}

/// Result alias for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Outcome of loading a single profile file.
#[derive(Debug)]
pub struct LoadResult {
    /// Path to the file that was loaded.
    pub path: PathBuf,
    /// Status of the load attempt.
    pub status: LoadStatus,
}

/// Status of a single file load attempt.
#[derive(Debug)]
pub enum LoadStatus {
    /// Profile was successfully loaded.
    Loaded { name: String },
    /// File was skipped (dotfile, non-YAML, etc.).
    Skipped { reason: String },
    /// Parse or validation error occurred.
    Failed { error: String },
}
