//! Constants used throughout the threadview library.
//!
//! Central definitions for the fixed display strings the view model
//! attaches to locally submitted content.

/// Attribution label rendered in front of every locally submitted entry.
pub const SELF_LABEL: &str = "You";

/// Name given to the thread a front end creates when none were requested.
pub const DEFAULT_THREAD_NAME: &str = "General";
