//! Tests for fragment rendering and the markup mode.

use threadview::render::{content_fragments, entry_line, plain_text};
use threadview::{Entry, RenderMode};

use crate::helpers::rendered_line;

#[test]
fn literal_line_is_prefix_space_then_text() {
    let entry = Entry::new("hello");
    let line = entry_line(&entry, RenderMode::Literal);

    assert_eq!(plain_text(&line), "You: hello");
    // The attribution prefix is the only emphasized part.
    assert_eq!(line[0].text, "You:");
    assert!(line[0].bold);
    assert!(line[1..].iter().all(|f| !f.bold));
}

#[test]
fn literal_mode_displays_markup_as_text() {
    let entry = Entry::new("<strong>not bold</strong>");
    let line = entry_line(&entry, RenderMode::Literal);

    assert_eq!(plain_text(&line), "You: <strong>not bold</strong>");
    assert!(line[2..].iter().all(|f| !f.bold));
}

#[test]
fn markup_mode_interprets_emphasis() {
    let entry = Entry::new("say it <strong>loud</strong>");
    let line = entry_line(&entry, RenderMode::Markup);

    // The tags are consumed, their content styled.
    assert_eq!(plain_text(&line), "You: say it loud");
    let loud = line
        .iter()
        .find(|f| f.text == "loud")
        .expect("styled run is its own fragment");
    assert!(loud.bold);
}

#[test]
fn markup_mode_keeps_unknown_markup_literal() {
    let fragments = content_fragments("<blink>hi</blink>", RenderMode::Markup);
    assert_eq!(plain_text(&fragments), "<blink>hi</blink>");
}

#[test]
fn attribution_prefix_is_emphasized_in_both_modes() {
    let entry = Entry::new("text");
    for mode in [RenderMode::Literal, RenderMode::Markup] {
        let line = entry_line(&entry, mode);
        assert_eq!(line[0].text, "You:");
        assert!(line[0].bold, "prefix must be emphasized in {mode:?}");
    }
}

#[test]
fn default_mode_is_literal() {
    assert_eq!(RenderMode::default(), RenderMode::Literal);
}

#[test]
fn rendered_line_matches_the_submitted_scenario() {
    // Submitting "  hello  " displays exactly "You: hello".
    let entry = Entry::new("hello");
    assert_eq!(rendered_line(&entry, RenderMode::Literal), "You: hello");
}

#[test]
fn empty_content_still_renders_the_prefix() {
    let entry = Entry::new("");
    let line = entry_line(&entry, RenderMode::Literal);
    assert_eq!(plain_text(&line), "You: ");
}
