//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters. Synchronous: resolution runs entirely within the
//! constructing call.

use crate::domain::{Bitmap, DomainError, Resolution};
use std::path::Path;

/// Word-list source. Reads a file and returns its tokens in file order.
pub trait WordListSource: Send + Sync {
    /// Parse the word list at `path`.
    ///
    /// Duplicates are returned as-is; callers that need a set collapse them.
    ///
    /// # Errors
    /// Returns `DomainError::WordList` if the file is missing, unreadable or malformed.
    fn parse_file(&self, path: &str) -> Result<Vec<String>, DomainError>;
}

/// Image saver. Persists a rendered bitmap at the target resolution.
pub trait ImageSaver: Send + Sync {
    /// Save `bitmap` to `path`, scaled to `resolution` when the sizes differ.
    ///
    /// # Errors
    /// Returns `DomainError::ImageSave` on encoding or I/O failure.
    fn save_image(
        &self,
        path: &Path,
        bitmap: &Bitmap,
        resolution: Resolution,
    ) -> Result<(), DomainError>;
}
