use thiserror::Error;

/// All failures the crate surfaces to callers.
///
/// Local failures (`Validation`, `NotFound`, `Storage`) are independent of
/// collaborator failures (`Submission`, `Session`): a failed on-chain
/// submission or session open never corrupts or rolls back the locally
/// persisted record set.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("No debt record with id {id}")]
    NotFound { id: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Transaction submission failed: {message}")]
    Submission { message: String },

    #[error("Off-chain session failed: {message}")]
    Session { message: String },
}

impl Error {
    /// Shorthand for a validation failure with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a storage-layer failure with the given message.
    pub fn storage(message: impl Into<String>) -> Self {
        Error::Storage {
            message: message.into(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
