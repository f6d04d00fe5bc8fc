//! Emphasis Resolution
//!
//! Turns `**bold**` and `*italic*` markers on a single line into inline spans.
//! Bold runs first so a `**` pair is never read as two italic markers; the
//! italic pass then pairs the remaining single asterisks left to right.
//! Neither kind of span crosses a newline. A span with nothing visible inside
//! keeps its markers as literal text.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{extend_line, line_plain_text, push_text, Inline, Line};

/// Leftmost, shortest `**...**` pair on a line
static BOLD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold span pattern"));

/// Resolve bold and italic spans on one line of text
pub fn resolve_line(text: &str) -> Line {
    let mut pieces: Line = Vec::new();
    let mut cursor = 0;

    for caps in BOLD_SPAN.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(&mut pieces, &text[cursor..whole.start()]);
        // Italic pairs may live inside a bold span but never straddle its edge
        pieces.push(Inline::Bold(resolve_italic(vec![Inline::text(inner.as_str())])));
        cursor = whole.end();
    }
    push_text(&mut pieces, &text[cursor..]);

    restore_blank_spans(resolve_italic(pieces))
}

/// Put the markers of blank spans back as text, innermost first
fn restore_blank_spans(line: Line) -> Line {
    let mut out: Line = Vec::new();
    for inline in line {
        match inline {
            Inline::Text(text) => push_text(&mut out, &text),
            Inline::Bold(children) => keep_or_unwrap(&mut out, children, "**", Inline::Bold),
            Inline::Italic(children) => keep_or_unwrap(&mut out, children, "*", Inline::Italic),
        }
    }
    out
}

fn keep_or_unwrap(out: &mut Line, children: Line, delimiter: &str, wrap: fn(Line) -> Inline) {
    let children = restore_blank_spans(children);
    if line_plain_text(&children).trim().is_empty() {
        push_text(out, delimiter);
        extend_line(out, children);
        push_text(out, delimiter);
    } else {
        out.push(wrap(children));
    }
}

/// Pair single `*` markers within one nesting level.
///
/// Markers pair in order (1st with 2nd, 3rd with 4th, ...). An odd marker out
/// is the last one and stays literal. Bold spans are opaque here, so an italic
/// pair can enclose one.
fn resolve_italic(pieces: Line) -> Line {
    let markers: usize = pieces
        .iter()
        .map(|piece| match piece {
            Inline::Text(text) => text.matches('*').count(),
            _ => 0,
        })
        .sum();
    let paired = markers - markers % 2;

    let mut out: Line = Vec::new();
    let mut open: Option<Line> = None;
    let mut seen = 0;

    for piece in pieces {
        match piece {
            Inline::Text(text) => {
                let mut run = String::new();
                for ch in text.chars() {
                    if ch == '*' && seen < paired {
                        seen += 1;
                        push_text(target(&mut open, &mut out), &run);
                        run.clear();
                        match open.take() {
                            Some(children) => out.push(Inline::Italic(children)),
                            None => open = Some(Vec::new()),
                        }
                    } else {
                        run.push(ch);
                    }
                }
                push_text(target(&mut open, &mut out), &run);
            }
            other => target(&mut open, &mut out).push(other),
        }
    }

    // `paired` is even, so every opened span has been closed
    if let Some(children) = open {
        out.push(Inline::Italic(children));
    }
    out
}

fn target<'a>(open: &'a mut Option<Line>, out: &'a mut Line) -> &'a mut Line {
    match open {
        Some(children) => children,
        None => out,
    }
}
