//! Error types for the contact model.
//!
//! Read-side operations never fail. These errors only surface at the
//! ingestion boundary: building a directory snapshot, strict tag parsing
//! and loading settings.

use thiserror::Error;

/// Error type for contact model operations.
#[derive(Error, Debug)]
pub enum ContactError {
    /// A contact with an empty identity was offered to the directory.
    #[error("Contact identity must not be empty")]
    EmptyIdentity,

    /// A relationship tag string is not part of the known vocabulary.
    #[error("Unknown relationship tag: {0}")]
    UnknownTag(String),

    /// A privacy setting string is not part of the known vocabulary.
    #[error("Unknown privacy setting: {0}")]
    UnknownPrivacySetting(String),

    /// Settings could not be encoded or decoded.
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

/// Result type alias for contact model operations.
pub type Result<T> = std::result::Result<T, ContactError>;
