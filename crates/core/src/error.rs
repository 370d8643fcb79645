use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        FolioError::Serialize(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
