//! Assistant Response Formatting
//!
//! Converts raw assistant text (lightweight markdown: `**bold**`, `*italic*`,
//! numbered lines, bullet lines, blank-line paragraphs) into a
//! [`FormattedResponse`] that the renderers in [`formatters`] turn into HTML,
//! markdown or JSON.
//!
//! ## Pipeline
//! 1. Trim; blank input yields the "No response generated." paragraph
//! 2. Resolve bold spans, then italic spans (per line)
//! 3. Split on blank lines and drop empty paragraphs
//! 4. Classify each paragraph as numbered list, bulleted list or plain prose
//!
//! The output is never empty for non-blank input.

pub mod types;
pub mod emphasis;
pub mod blocks;
pub mod formatters;

pub use types::{Block, BlockKind, FormattedResponse, Inline, Line, ListItem};
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};

/// Shown when the assistant returned nothing but whitespace
pub const NO_RESPONSE: &str = "No response generated.";

/// Shape raw assistant text into display-ready blocks
pub fn format_response(raw: &str) -> FormattedResponse {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FormattedResponse::message(NO_RESPONSE);
    }

    let blocks = blocks::segment(trimmed);
    if blocks.is_empty() {
        // Keep the whole text as one paragraph rather than return nothing
        tracing::warn!("no paragraphs survived segmentation, wrapping whole response");
        return FormattedResponse {
            blocks: vec![Block::Paragraph {
                lines: blocks::paragraph_lines(trimmed),
            }],
        };
    }

    tracing::debug!(blocks = blocks.len(), "formatted assistant response");
    FormattedResponse { blocks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_uses_fallback() {
        for raw in ["", "   ", "\n\n\t\n"] {
            let formatted = format_response(raw);
            assert_eq!(formatted, FormattedResponse::message(NO_RESPONSE));
        }
    }

    #[test]
    fn test_bold_paragraph() {
        let formatted = format_response("  **Water** daily \n");
        assert_eq!(
            formatted.blocks,
            vec![Block::Paragraph {
                lines: vec![vec![
                    Inline::Bold(vec![Inline::text("Water")]),
                    Inline::text(" daily"),
                ]],
            }]
        );
        assert!(!formatted.plain_text().contains('*'));
    }

    #[test]
    fn test_mixed_blocks_preserve_order() {
        let raw = "Here is the plan:\n\n1. Remove leaves\n2. Apply fungicide\n\n* Water early\n* Mulch\n\nGood luck!";
        let kinds: Vec<BlockKind> = format_response(raw).blocks.iter().map(Block::kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Paragraph,
                BlockKind::NumberedList,
                BlockKind::BulletedList,
                BlockKind::Paragraph,
            ]
        );
    }

    #[test]
    fn test_lone_markers_never_vanish() {
        let formatted = format_response("*");
        assert_eq!(formatted.plain_text(), "•");
        assert_eq!(formatted.blocks.len(), 1);
        assert_eq!(formatted.blocks[0].kind(), BlockKind::BulletedList);
    }
}
