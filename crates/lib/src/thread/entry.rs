//! The fundamental display unit: one rendered message.

use serde::{Deserialize, Serialize};

/// One rendered message in a thread.
///
/// An entry carries exactly one attribute, its text content. There is no
/// sender field, timestamp, or unique id: attribution to the local sender
/// label happens at render time, and entries exist only as display state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    text: String,
}

impl Entry {
    /// Creates an entry from already-trimmed message text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The message text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
