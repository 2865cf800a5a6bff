//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. The `Display` form of a
//! variant is the message surfaced to the user when resolution fails.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed `"<width>x<height>"` string.
    #[error("Invalid resolution: {0}")]
    Resolution(String),

    /// Color name not present in the named-color table and not a hex literal.
    #[error("Unknown color: '{0}'")]
    UnknownColor(String),

    /// Word-list file missing, unreadable or malformed.
    #[error("Word list error: {0}")]
    WordList(String),

    #[error("Image save failed: {0}")]
    ImageSave(String),
}
