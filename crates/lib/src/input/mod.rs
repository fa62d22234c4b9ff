//!
//! The editable input buffer submissions are read from.
//!
//! The buffer owns its text and a char-indexed cursor so front ends can
//! edit mid-line. The one contract that matters to the view model is
//! [`InputBuffer::take_submission`]: reading a submission trims surrounding
//! whitespace, and a blank buffer yields nothing and is left untouched.

use serde::{Deserialize, Serialize};

/// The text field a user types a message into before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBuffer {
    text: String,
    /// Cursor position as a char index into `text`, `0..=char count`.
    cursor: usize,
}

impl InputBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current buffer text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The cursor position as a char index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True if the buffer is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replaces the buffer text and places the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    /// Inserts a char at the cursor and advances it.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Removes the char before the cursor, if any.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.text.remove(at);
    }

    /// Removes the char at the cursor, if any.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.text.remove(at);
        }
    }

    /// Moves the cursor one char left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one char right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the start of the buffer.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor past the last char.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Reads and resets the buffer for submission.
    ///
    /// Returns the text with surrounding whitespace trimmed and resets the
    /// buffer (cursor included) to empty. A blank buffer returns `None` and
    /// is left exactly as it was, cursor included.
    pub fn take_submission(&mut self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let submission = trimmed.to_string();
        self.text.clear();
        self.cursor = 0;
        Some(submission)
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the cursor into `text`.
    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len())
    }
}
