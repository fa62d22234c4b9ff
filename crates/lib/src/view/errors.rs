//! Structured error types for registry operations.
//!
//! Every fallible `ChatThreadView` operation resolves a thread id first;
//! these variants make the resolution outcome explicit instead of leaving
//! a miss as an implicit no-op.

use thiserror::Error;

use crate::thread::ThreadId;

/// Errors from [`ChatThreadView`](crate::ChatThreadView) operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ViewError {
    /// No thread is registered under the addressed id
    #[error("Thread not found: {thread}")]
    ThreadNotFound { thread: ThreadId },

    /// A thread is already registered under the addressed id
    #[error("Thread already exists: {thread}")]
    ThreadExists { thread: ThreadId },
}

impl ViewError {
    /// Check if this error indicates the addressed thread was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, ViewError::ThreadNotFound { .. })
    }

    /// Check if this error indicates a duplicate registration
    pub fn is_already_exists(&self) -> bool {
        matches!(self, ViewError::ThreadExists { .. })
    }

    /// Get the thread id the failed operation addressed
    pub fn thread(&self) -> &ThreadId {
        match self {
            ViewError::ThreadNotFound { thread } | ViewError::ThreadExists { thread } => thread,
        }
    }
}

// Conversion from ViewError to the main Error type
impl From<ViewError> for crate::Error {
    fn from(err: ViewError) -> Self {
        crate::Error::View(err)
    }
}
