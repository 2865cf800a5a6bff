//! In-memory word lists for testing and dry runs. Implements WordListSource.
//!
//! Paths map to fixed token lists; unknown paths behave like missing files.

use crate::domain::DomainError;
use crate::ports::WordListSource;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Word-list source backed by a map. Counts calls to `parse_file`.
#[derive(Debug, Default)]
pub struct InMemoryWordListSource {
    lists: HashMap<String, Vec<String>>,
    calls: AtomicUsize,
}

impl InMemoryWordListSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `words` under `path`, replacing any previous list.
    pub fn with_list<I, S>(mut self, path: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists
            .insert(path.into(), words.into_iter().map(Into::into).collect());
        self
    }

    /// Number of `parse_file` calls so far, including failed ones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl WordListSource for InMemoryWordListSource {
    fn parse_file(&self, path: &str) -> Result<Vec<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.lists
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::WordList(format!("{}: file not found", path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_source() {
        let source = InMemoryWordListSource::new().with_list("stop.txt", ["a", "b", "a"]);

        assert_eq!(source.parse_file("stop.txt").unwrap(), vec!["a", "b", "a"]);
        assert!(source.parse_file("other.txt").is_err());
        assert_eq!(source.call_count(), 2);
    }
}
