//!
//! Defines one thread's owned display state and the operations on it.
//!
//! A `Thread` is an ordered sequence of entries plus the thread's name
//! label. Used on its own it is the singleton flavor of the view: the
//! display state always exists, so submitting and clearing cannot fail.
//! The multi-thread flavor keys many of them in a
//! [`ChatThreadView`](crate::ChatThreadView).

pub mod entry;
pub mod id;

pub use entry::Entry;
pub use id::ThreadId;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::InputBuffer;

/// What a submit attempt did to the thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The trimmed input was appended as a new entry and the buffer reset.
    Appended,
    /// The input was empty or whitespace-only; nothing changed.
    IgnoredBlank,
}

impl SubmitOutcome {
    /// True if a new entry was appended.
    pub fn appended(&self) -> bool {
        matches!(self, SubmitOutcome::Appended)
    }
}

/// One thread's display state: entries in submission order and a name label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    name: String,
    entries: Vec<Entry>,
}

impl Thread {
    /// Creates an empty thread with the given name label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// The name label text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name label text.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Entries in submission order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries currently displayed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the thread displays no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently appended entry.
    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Appends an already-built entry as the last element of the display.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Submits the input buffer into this thread.
    ///
    /// Reads the buffer through [`InputBuffer::take_submission`]: a blank
    /// buffer is a silent no-op (no entry is created and the buffer, cursor
    /// included, is left as-is), otherwise the trimmed text becomes the last
    /// entry and the buffer is reset to empty.
    pub fn submit(&mut self, input: &mut InputBuffer) -> SubmitOutcome {
        match input.take_submission() {
            Some(text) => {
                debug!(thread = %self.name, chars = text.chars().count(), "appending entry");
                self.entries.push(Entry::new(text));
                SubmitOutcome::Appended
            }
            None => SubmitOutcome::IgnoredBlank,
        }
    }

    /// Clears the display: removes every entry and empties the name label.
    ///
    /// Idempotent; clearing an already-cleared thread changes nothing.
    pub fn clear(&mut self) {
        debug!(thread = %self.name, dropped = self.entries.len(), "clearing thread");
        self.entries.clear();
        self.name.clear();
    }
}
