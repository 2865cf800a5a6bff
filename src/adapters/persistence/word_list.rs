//! Implements WordListSource. Reads whitespace-separated words from a UTF-8 text file.
//! Tokens are returned in file order; duplicates are kept.

use crate::domain::DomainError;
use crate::ports::WordListSource;
use std::fs;
use std::path::Path;
use tracing::debug;

/// File-system word list. One or more words per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWordListSource;

impl FsWordListSource {
    pub fn new() -> Self {
        Self
    }

    fn tokenize(content: &str) -> Vec<String> {
        content.split_whitespace().map(str::to_string).collect()
    }
}

impl WordListSource for FsWordListSource {
    fn parse_file(&self, path: &str) -> Result<Vec<String>, DomainError> {
        let content = fs::read_to_string(Path::new(path))
            .map_err(|e| DomainError::WordList(format!("{}: {}", path, e)))?;
        let words = Self::tokenize(&content);
        debug!(path, count = words.len(), "word list read");
        Ok(words)
    }
}
