//! Paragraph segmentation and classification
//!
//! A paragraph's kind is decided by its first non-blank line, read after
//! emphasis has been resolved. List paragraphs are folded line by line through
//! [`ListAccumulator`], which owns the in-progress item until the next item
//! starts or the paragraph ends.

use regex::Regex;
use std::sync::LazyLock;

use super::emphasis::resolve_line;
use super::types::{extend_line, push_text, trim_line, Block, Inline, Line, ListItem};

/// Blank-line paragraph separator (two or more newlines)
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("paragraph break pattern"));

static NUMBERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("numbered marker pattern"));

static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*•-]\s*").expect("bullet marker pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListStyle {
    Numbered,
    Bulleted,
}

/// Split trimmed text into classified blocks, dropping blank paragraphs
pub fn segment(text: &str) -> Vec<Block> {
    PARAGRAPH_BREAK
        .split(text)
        .filter_map(classify_paragraph)
        .collect()
}

/// Resolve every line of a paragraph and trim it
pub(crate) fn paragraph_lines(paragraph: &str) -> Vec<Line> {
    paragraph
        .split('\n')
        .map(|raw| trim_line(resolve_line(raw)))
        .collect()
}

fn classify_paragraph(paragraph: &str) -> Option<Block> {
    let lines: Vec<Line> = paragraph_lines(paragraph)
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect();

    let first = lines.first()?;
    let block = match list_style(first) {
        Some(style) => {
            let mut acc = ListAccumulator::default();
            for line in lines {
                acc.push_line(style, line);
            }
            let items = acc.finish();
            match style {
                ListStyle::Numbered => Block::NumberedList { items },
                ListStyle::Bulleted => Block::BulletedList { items },
            }
        }
        None => Block::Paragraph { lines },
    };

    tracing::debug!(kind = ?block.kind(), "classified paragraph");
    Some(block)
}

/// Leading plain text of a line, if the line opens with one
fn leading_text(line: &Line) -> Option<&str> {
    match line.first() {
        Some(Inline::Text(text)) => Some(text.as_str()),
        _ => None,
    }
}

fn list_style(line: &Line) -> Option<ListStyle> {
    let head = leading_text(line)?;
    if NUMBERED_MARKER.is_match(head) {
        Some(ListStyle::Numbered)
    } else if BULLET_MARKER.is_match(head) {
        Some(ListStyle::Bulleted)
    } else {
        None
    }
}

/// Split a numbered line into its `"N."` marker and the remaining content.
///
/// Hands the line back untouched when it does not open with a marker.
fn split_numbered(mut line: Line) -> Result<(String, Line), Line> {
    let Some((marker, rest)) = leading_text(&line).and_then(|head| {
        let end = NUMBERED_MARKER.find(head)?.end();
        Some((head[..end].to_string(), head[end..].trim_start().to_string()))
    }) else {
        return Err(line);
    };
    replace_head(&mut line, rest);
    Ok((marker, line))
}

/// Drop the bullet glyph and the whitespace after it
fn strip_bullet(mut line: Line) -> Result<Line, Line> {
    let Some(rest) = leading_text(&line).and_then(|head| {
        let end = BULLET_MARKER.find(head)?.end();
        Some(head[end..].to_string())
    }) else {
        return Err(line);
    };
    replace_head(&mut line, rest);
    Ok(line)
}

fn replace_head(line: &mut Line, rest: String) {
    if rest.is_empty() {
        line.remove(0);
    } else {
        line[0] = Inline::Text(rest);
    }
}

/// Builds list items while walking a paragraph's lines
#[derive(Debug, Default)]
struct ListAccumulator {
    items: Vec<ListItem>,
    current: Option<ListItem>,
}

impl ListAccumulator {
    fn push_line(&mut self, style: ListStyle, line: Line) {
        let started = match style {
            ListStyle::Numbered => split_numbered(line).map(|(marker, content)| (Some(marker), content)),
            ListStyle::Bulleted => strip_bullet(line).map(|content| (None, content)),
        };
        match started {
            Ok((marker, content)) => self.start_item(marker, content),
            Err(line) => self.continue_item(line),
        }
    }

    fn start_item(&mut self, marker: Option<String>, content: Line) {
        if let Some(done) = self.current.take() {
            self.items.push(done);
        }
        self.current = Some(ListItem { marker, content });
    }

    /// Space-join a continuation line onto the in-progress item.
    ///
    /// With no item yet, the line becomes a marker-less item of its own.
    fn continue_item(&mut self, line: Line) {
        match self.current.as_mut() {
            Some(item) => {
                push_text(&mut item.content, " ");
                extend_line(&mut item.content, line);
            }
            None => {
                tracing::debug!("list continuation before first item, keeping as plain item");
                self.start_item(None, line);
            }
        }
    }

    fn finish(mut self) -> Vec<ListItem> {
        if let Some(done) = self.current.take() {
            self.items.push(done);
        }
        self.items
    }
}
