//! Minimal inline-markup scanner for legacy-compatible rendering.
//!
//! Recognizes the emphasis tags the original widget could actually emit and
//! maps them onto fragment styling. Everything else (unknown tags, a `<`
//! that never closes) passes through as literal text. A recognized close
//! tag with no matching open is swallowed without output, and an unclosed
//! open tag styles through to the end of the text.

use super::Fragment;

#[derive(Debug, Clone, Copy)]
enum Kind {
    Bold,
    Italic,
    Code,
}

#[derive(Debug, Clone, Copy)]
enum Tag {
    Open(Kind),
    Close(Kind),
}

/// Nesting depth per style; a style is active while its depth is non-zero.
#[derive(Debug, Clone, Copy, Default)]
struct StyleState {
    bold: u32,
    italic: u32,
    code: u32,
}

impl StyleState {
    fn apply(&mut self, tag: Tag) {
        let depth = match tag {
            Tag::Open(Kind::Bold) | Tag::Close(Kind::Bold) => &mut self.bold,
            Tag::Open(Kind::Italic) | Tag::Close(Kind::Italic) => &mut self.italic,
            Tag::Open(Kind::Code) | Tag::Close(Kind::Code) => &mut self.code,
        };
        match tag {
            Tag::Open(_) => *depth += 1,
            Tag::Close(_) => *depth = depth.saturating_sub(1),
        }
    }

    fn fragment(&self, text: String) -> Fragment {
        Fragment {
            text,
            bold: self.bold > 0,
            italic: self.italic > 0,
            code: self.code > 0,
        }
    }
}

/// Scans message text, interpreting the recognized emphasis tags.
pub fn scan(text: &str) -> Vec<Fragment> {
    let mut out = Vec::new();
    let mut run = String::new();
    let mut state = StyleState::default();
    let mut rest = text;

    while let Some(idx) = rest.find('<') {
        let (before, tail) = rest.split_at(idx);
        run.push_str(before);
        match take_tag(tail) {
            Some((tag, remainder)) => {
                flush(&mut out, &mut run, state);
                state.apply(tag);
                rest = remainder;
            }
            None => {
                run.push('<');
                rest = &tail[1..];
            }
        }
    }
    run.push_str(rest);
    flush(&mut out, &mut run, state);
    out
}

/// Emits the accumulated run as a fragment styled by `state`.
fn flush(out: &mut Vec<Fragment>, run: &mut String, state: StyleState) {
    if !run.is_empty() {
        out.push(state.fragment(std::mem::take(run)));
    }
}

/// Parses a recognized tag at the start of `input` (which begins with `<`).
///
/// Returns the tag and the text after its `>`, or `None` if what follows is
/// not one of the recognized emphasis tags.
fn take_tag(input: &str) -> Option<(Tag, &str)> {
    let end = input.find('>')?;
    let inner = &input[1..end];
    let (closing, name) = match inner.strip_prefix('/') {
        Some(name) => (true, name),
        None => (false, inner),
    };
    let kind = match name.to_ascii_lowercase().as_str() {
        "strong" | "b" => Kind::Bold,
        "em" | "i" => Kind::Italic,
        "code" => Kind::Code,
        _ => return None,
    };
    let tag = if closing {
        Tag::Close(kind)
    } else {
        Tag::Open(kind)
    };
    Some((tag, &input[end + 1..]))
}
