//! Append-only archive of normalized capture text.
//!
//! The capture path appends, the manual re-tokenize path reads the last
//! entry; both go through one mutex so "the last entry" is always the most
//! recent append. Never pruned by the core — bounded only by process
//! lifetime.

use std::sync::{Arc, Mutex};

/// Shared append-only text archive. Cheap to clone (`Arc` clone).
#[derive(Debug, Clone, Default)]
pub struct TextArchive {
    inner: Arc<Mutex<Vec<String>>>,
}

impl TextArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one normalized capture.
    pub fn push(&self, text: impl Into<String>) {
        self.inner.lock().unwrap().push(text.into());
    }

    /// The most recently appended entry, if any.
    pub fn last(&self) -> Option<String> {
        self.inner.lock().unwrap().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}
