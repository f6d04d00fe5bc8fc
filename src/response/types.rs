use serde::{Deserialize, Serialize};

/// Inline run of text with emphasis already resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(value.into())
    }

    /// Visible characters only (markers and markup dropped)
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(text) => text.clone(),
            Inline::Bold(children) | Inline::Italic(children) => line_plain_text(children),
        }
    }
}

/// One line of a paragraph or list item
pub type Line = Vec<Inline>;

/// A single list entry.
///
/// `marker` holds the leading `"1."` of a numbered item. Bullets, and
/// continuation lines that arrive before any item, have no marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub marker: Option<String>,
    pub content: Line,
}

/// Classified paragraph unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Plain prose; lines are kept apart and rendered with explicit breaks
    Paragraph { lines: Vec<Line> },
    NumberedList { items: Vec<ListItem> },
    BulletedList { items: Vec<ListItem> },
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Paragraph { .. } => BlockKind::Paragraph,
            Block::NumberedList { .. } => BlockKind::NumberedList,
            Block::BulletedList { .. } => BlockKind::BulletedList,
        }
    }

    pub fn items(&self) -> &[ListItem] {
        match self {
            Block::Paragraph { .. } => &[],
            Block::NumberedList { items } | Block::BulletedList { items } => items,
        }
    }

    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph { lines } => lines
                .iter()
                .map(|line| line_plain_text(line))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::NumberedList { items } => items
                .iter()
                .map(|item| match &item.marker {
                    Some(marker) => format!("{} {}", marker, line_plain_text(&item.content)),
                    None => line_plain_text(&item.content),
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Block::BulletedList { items } => items
                .iter()
                .map(|item| format!("• {}", line_plain_text(&item.content)).trim_end().to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph,
    NumberedList,
    BulletedList,
}

/// Display-ready form of an assistant response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattedResponse {
    pub blocks: Vec<Block>,
}

impl FormattedResponse {
    /// Single plain paragraph holding `text` verbatim
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![Block::Paragraph {
                lines: vec![vec![Inline::Text(text.into())]],
            }],
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

pub fn line_plain_text(line: &[Inline]) -> String {
    line.iter().map(Inline::plain_text).collect()
}

/// Append text to a line, merging with a trailing text run
pub(crate) fn push_text(line: &mut Line, text: &str) {
    if text.is_empty() {
        return;
    }
    match line.last_mut() {
        Some(Inline::Text(last)) => last.push_str(text),
        _ => line.push(Inline::Text(text.to_string())),
    }
}

/// Append one line onto another, keeping adjacent text runs merged
pub(crate) fn extend_line(line: &mut Line, tail: Line) {
    for inline in tail {
        match inline {
            Inline::Text(text) => push_text(line, &text),
            other => line.push(other),
        }
    }
}

/// Strip outer whitespace from the leading and trailing text runs.
///
/// Emphasis spans are never trimmed into, so `** x**` keeps its inner space.
pub(crate) fn trim_line(mut line: Line) -> Line {
    while let Some(Inline::Text(first)) = line.first_mut() {
        let cut = first.len() - first.trim_start().len();
        if cut == first.len() {
            line.remove(0);
        } else {
            first.drain(..cut);
            break;
        }
    }
    while let Some(Inline::Text(last)) = line.last_mut() {
        let keep = last.trim_end().len();
        if keep == 0 {
            line.pop();
        } else {
            last.truncate(keep);
            break;
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_line_keeps_emphasis_interior() {
        let line = vec![
            Inline::text("   "),
            Inline::Bold(vec![Inline::text(" x")]),
            Inline::text(" tail  "),
        ];
        let trimmed = trim_line(line);
        assert_eq!(
            trimmed,
            vec![Inline::Bold(vec![Inline::text(" x")]), Inline::text(" tail")]
        );
    }

    #[test]
    fn test_trim_line_blank_becomes_empty() {
        assert!(trim_line(vec![Inline::text(" \t\r")]).is_empty());
    }

    #[test]
    fn test_extend_line_merges_text() {
        let mut line = vec![Inline::text("Remove")];
        push_text(&mut line, " ");
        extend_line(&mut line, vec![Inline::text("leaves"), Inline::Italic(vec![])]);
        assert_eq!(line, vec![Inline::text("Remove leaves"), Inline::Italic(vec![])]);
    }

    #[test]
    fn test_plain_text_of_list() {
        let block = Block::NumberedList {
            items: vec![ListItem {
                marker: Some("1.".to_string()),
                content: vec![Inline::Bold(vec![Inline::text("Prune")]), Inline::text(" early")],
            }],
        };
        assert_eq!(block.plain_text(), "1. Prune early");
        assert_eq!(block.kind(), BlockKind::NumberedList);
    }
}
