//!
//! Threadview: a typed view model for chat-thread displays.
//! This library provides the state and rendering core that chat front ends build on.
//!
//! ## Core Concepts
//!
//! * **Entries (`thread::Entry`)**: one rendered message. Its only attribute is its text content; attribution to the local sender happens at render time.
//! * **Threads (`thread::Thread`)**: an ordered sequence of entries plus the thread's name label. Used directly, a `Thread` is the singleton view and its operations cannot fail.
//! * **The registry (`view::ChatThreadView`)**: an owned map from typed `ThreadId` keys to threads. A lookup miss is a typed outcome, not a silently ignored address.
//! * **The input buffer (`input::InputBuffer`)**: the editable field submissions are read from. Blank submissions are contractually ignored and leave the buffer untouched.
//! * **Rendering (`render`)**: entries become framework-neutral styled fragments under a `RenderMode`: literal by default, with a legacy mode that interprets inline emphasis markup.

pub mod constants;
pub mod input;
pub mod render;
pub mod thread;
pub mod view;

pub use input::InputBuffer;
pub use render::{Fragment, RenderMode};
pub use thread::{Entry, SubmitOutcome, Thread, ThreadId};
pub use view::ChatThreadView;

/// Result type used throughout the threadview library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the threadview library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured registry errors from the view module
    #[error(transparent)]
    View(view::ViewError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::View(_) => "view",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::View(view_err) => view_err.is_not_found(),
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_already_exists(&self) -> bool {
        match self {
            Error::View(view_err) => view_err.is_already_exists(),
        }
    }
}
