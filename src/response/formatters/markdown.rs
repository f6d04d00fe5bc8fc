use crate::response::types::{Block, FormattedResponse, Inline};

/// Markdown formatter for formatted responses.
///
/// Produces canonical markdown: `-` bullets, `N.` items, hard line breaks in
/// plain paragraphs. Literal asterisks are backslash-escaped so CommonMark
/// renderers show them as written. `format_response` does not read `\*` back
/// as an escape.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format response as markdown
    pub fn format(response: &FormattedResponse) -> String {
        let mut md = String::with_capacity(512);

        for (idx, block) in response.blocks.iter().enumerate() {
            if idx > 0 {
                md.push_str("\n\n");
            }
            match block {
                Block::Paragraph { lines } => {
                    let rendered: Vec<String> = lines.iter().map(|line| inlines(line)).collect();
                    md.push_str(&rendered.join("  \n"));
                }
                Block::NumberedList { items } => {
                    let rendered: Vec<String> = items
                        .iter()
                        .map(|item| match &item.marker {
                            Some(marker) => format!("{} {}", marker, inlines(&item.content)),
                            None => inlines(&item.content),
                        })
                        .collect();
                    md.push_str(&rendered.join("\n"));
                }
                Block::BulletedList { items } => {
                    let rendered: Vec<String> = items
                        .iter()
                        .map(|item| format!("- {}", inlines(&item.content)))
                        .collect();
                    md.push_str(&rendered.join("\n"));
                }
            }
        }

        md
    }
}

fn inlines(line: &[Inline]) -> String {
    line.iter()
        .map(|inline| match inline {
            Inline::Text(text) => text.replace('*', "\\*"),
            Inline::Bold(children) => format!("**{}**", inlines(children)),
            Inline::Italic(children) => format!("*{}*", inlines(children)),
        })
        .collect()
}
