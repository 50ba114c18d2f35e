use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("User not found")]
    UserNotFound(String),

    #[error("GitHub API Error: {0}")]
    Upstream(String),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("API Key is required for AI Analysis")]
    MissingCredential,

    #[error("{0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of [`Error`], used by callers that branch on the
/// failure class rather than on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UserNotFound,
    UpstreamError,
    NetworkFailure,
    MissingCredential,
    GenerationFailed,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UserNotFound(_) => ErrorKind::UserNotFound,
            Error::Upstream(_) => ErrorKind::UpstreamError,
            Error::Network(_) => ErrorKind::NetworkFailure,
            Error::MissingCredential => ErrorKind::MissingCredential,
            Error::GenerationFailed(_) => ErrorKind::GenerationFailed,
            Error::Config(_) | Error::Serialization(_) => ErrorKind::Internal,
        }
    }
}
