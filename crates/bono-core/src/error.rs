//! Error types for bono-core

use thiserror::Error;

/// Result type alias using bono-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bono-core operations
///
/// Validation variants are raised before any remote call is made; every
/// other variant describes a failed round trip to the document store.
#[derive(Error, Debug)]
pub enum Error {
    /// The URL input was empty after trimming
    #[error("URL must not be empty")]
    EmptyUrl,

    /// The folder name input was empty after trimming
    #[error("Folder name must not be empty")]
    EmptyFolderName,

    /// A folder with this name already exists
    #[error("Folder already exists: {0}")]
    DuplicateFolder(String),

    /// The folder is not part of the current folder list
    #[error("Unknown folder: {0}")]
    UnknownFolder(String),

    /// The only remaining folder cannot be removed
    #[error("The last remaining folder cannot be deleted")]
    LastFolder,

    /// A folder deletion is already running
    #[error("A folder deletion is already in progress")]
    FolderDeletionInProgress,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The document store rejected the request
    #[error("Store error: {0}")]
    Store(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored document could not be decoded
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The live snapshot channel was closed by the store
    #[error("Snapshot subscription closed")]
    SubscriptionClosed,
}

impl Error {
    /// Whether this error was raised by local input validation.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyUrl
                | Self::EmptyFolderName
                | Self::DuplicateFolder(_)
                | Self::UnknownFolder(_)
                | Self::LastFolder
                | Self::FolderDeletionInProgress
                | Self::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_classified() {
        assert!(Error::EmptyUrl.is_validation());
        assert!(Error::DuplicateFolder("기타".to_string()).is_validation());
        assert!(Error::LastFolder.is_validation());
        assert!(!Error::Store("boom".to_string()).is_validation());
        assert!(!Error::SubscriptionClosed.is_validation());
    }
}
