//!
//! The multi-thread registry: typed keys mapped to owned thread state.
//!
//! `ChatThreadView` is the multi-thread flavor of the view. Where the
//! singleton [`Thread`] assumes its display always exists, every registry
//! operation resolves a [`ThreadId`] first and reports a miss as a typed
//! [`ViewError::ThreadNotFound`], leaving it to the caller to surface or
//! swallow it.

pub mod errors;

pub use errors::ViewError;

use std::collections::BTreeMap;

use tracing::debug;

use crate::Result;
use crate::input::InputBuffer;
use crate::thread::{SubmitOutcome, Thread, ThreadId};

/// Registry of chat threads keyed by [`ThreadId`].
#[derive(Debug, Clone, Default)]
pub struct ChatThreadView {
    threads: BTreeMap<ThreadId, Thread>,
}

impl ChatThreadView {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new thread under `id` with its name label preset.
    ///
    /// # Returns
    /// A `Result` that is [`ViewError::ThreadExists`] if `id` is already
    /// registered.
    pub fn create_thread(
        &mut self,
        id: impl Into<ThreadId>,
        name: impl Into<String>,
    ) -> Result<()> {
        let id = id.into();
        if self.threads.contains_key(&id) {
            return Err(ViewError::ThreadExists { thread: id }.into());
        }
        debug!(thread = %id, "registering thread");
        self.threads.insert(id, Thread::new(name));
        Ok(())
    }

    /// Removes the thread registered under `id`, returning its final state.
    pub fn remove_thread(&mut self, id: &ThreadId) -> Result<Thread> {
        self.threads
            .remove(id)
            .ok_or_else(|| ViewError::ThreadNotFound { thread: id.clone() }.into())
    }

    /// Appends the input buffer's submission to the thread at `id`.
    ///
    /// Delegates to [`Thread::submit`]: a blank buffer is a silent no-op
    /// reported as [`SubmitOutcome::IgnoredBlank`]. An unregistered id is a
    /// typed miss and leaves the buffer untouched.
    pub fn append_message(
        &mut self,
        id: &ThreadId,
        input: &mut InputBuffer,
    ) -> Result<SubmitOutcome> {
        let thread = self.lookup_mut(id)?;
        Ok(thread.submit(input))
    }

    /// Clears the thread at `id`: every entry and its name label.
    ///
    /// An unregistered id is a typed miss; no other thread is touched.
    pub fn clear_thread(&mut self, id: &ThreadId) -> Result<()> {
        self.lookup_mut(id)?.clear();
        Ok(())
    }

    /// Shared access to the thread at `id`.
    pub fn thread(&self, id: &ThreadId) -> Result<&Thread> {
        self.threads
            .get(id)
            .ok_or_else(|| ViewError::ThreadNotFound { thread: id.clone() }.into())
    }

    /// Exclusive access to the thread at `id`.
    pub fn thread_mut(&mut self, id: &ThreadId) -> Result<&mut Thread> {
        self.lookup_mut(id)
    }

    /// True if a thread is registered under `id`.
    pub fn contains(&self, id: &ThreadId) -> bool {
        self.threads.contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &ThreadId> {
        self.threads.keys()
    }

    /// Threads with their ids, in sorted id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ThreadId, &Thread)> {
        self.threads.iter()
    }

    /// Number of registered threads.
    pub fn len(&self) -> usize {
        self.threads.len()
    }

    /// True if no threads are registered.
    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    fn lookup_mut(&mut self, id: &ThreadId) -> Result<&mut Thread> {
        self.threads
            .get_mut(id)
            .ok_or_else(|| ViewError::ThreadNotFound { thread: id.clone() }.into())
    }
}
