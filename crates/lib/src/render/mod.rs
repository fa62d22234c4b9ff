//!
//! Entry rendering: framework-neutral styled fragments.
//!
//! The view model never imports a UI framework. Rendering an entry yields a
//! sequence of [`Fragment`]s (runs of text with uniform styling) that a
//! front end maps onto whatever span type its widget toolkit uses.
//!
//! How message text becomes fragments is governed by [`RenderMode`]. The
//! original widget this view descends from inserted message text as markup,
//! so markup syntax in a message was interpreted rather than displayed.
//! That behavior is preserved behind the explicit `Markup` mode; the
//! default, `Literal`, displays text exactly as submitted.

pub mod markup;

use serde::{Deserialize, Serialize};

use crate::constants::SELF_LABEL;
use crate::thread::Entry;

/// How message text is turned into display fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Display the text exactly as submitted. The default.
    #[default]
    Literal,
    /// Legacy-compatible: interpret the inline emphasis subset of markup
    /// (`<strong>`, `<b>`, `<em>`, `<i>`, `<code>`) instead of displaying
    /// it. Markup the scanner does not recognize stays literal.
    Markup,
}

/// A run of text with uniform styling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl Fragment {
    /// An unstyled fragment.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A bold fragment.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            ..Self::default()
        }
    }
}

/// Renders one entry as a display line: the emphasized attribution prefix
/// `You:` followed by a space and the content fragments.
pub fn entry_line(entry: &Entry, mode: RenderMode) -> Vec<Fragment> {
    let mut line = vec![Fragment::bold(format!("{SELF_LABEL}:")), Fragment::raw(" ")];
    line.extend(content_fragments(entry.text(), mode));
    line
}

/// Renders message text alone, without the attribution prefix.
pub fn content_fragments(text: &str, mode: RenderMode) -> Vec<Fragment> {
    match mode {
        RenderMode::Literal => vec![Fragment::raw(text)],
        RenderMode::Markup => markup::scan(text),
    }
}

/// Joins a fragment sequence back into plain text, styling discarded.
pub fn plain_text(fragments: &[Fragment]) -> String {
    fragments.iter().map(|f| f.text.as_str()).collect()
}
