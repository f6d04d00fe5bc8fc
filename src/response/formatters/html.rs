use askama_escape::{escape, Html};

use crate::response::types::{Block, FormattedResponse, Inline, ListItem};

/// HTML formatter for formatted responses.
///
/// Emits the chat page's markup: one `mb-3` div per block, one `mb-2` div per
/// list item. Every text run is escaped, so the output is safe to embed.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format response as an HTML fragment
    pub fn format(response: &FormattedResponse) -> String {
        let mut html = String::with_capacity(512);

        for block in &response.blocks {
            html.push_str("<div class=\"mb-3\">");
            match block {
                Block::Paragraph { lines } => {
                    for (idx, line) in lines.iter().enumerate() {
                        if idx > 0 {
                            html.push_str("<br>");
                        }
                        push_inlines(&mut html, line);
                    }
                }
                Block::NumberedList { items } => {
                    for item in items {
                        push_numbered_item(&mut html, item);
                    }
                }
                Block::BulletedList { items } => {
                    for item in items {
                        html.push_str("<div class=\"mb-2\"><span class=\"text-success me-2\">•</span>");
                        push_inlines(&mut html, &item.content);
                        html.push_str("</div>");
                    }
                }
            }
            html.push_str("</div>");
        }

        html
    }
}

fn push_numbered_item(html: &mut String, item: &ListItem) {
    html.push_str("<div class=\"mb-2\">");
    if let Some(marker) = &item.marker {
        html.push_str(&format!(
            "<strong class=\"text-success\">{}</strong>",
            escape_html(marker)
        ));
        if !item.content.is_empty() {
            html.push(' ');
        }
    }
    push_inlines(html, &item.content);
    html.push_str("</div>");
}

fn push_inlines(html: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => html.push_str(&escape_html(text)),
            Inline::Bold(children) => {
                html.push_str("<strong class=\"text-primary\">");
                push_inlines(html, children);
                html.push_str("</strong>");
            }
            Inline::Italic(children) => {
                html.push_str("<em>");
                push_inlines(html, children);
                html.push_str("</em>");
            }
        }
    }
}

/// Escape text for HTML through askama's escaper
pub fn escape_html(text: &str) -> String {
    escape(text, Html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::format_response;

    #[test]
    fn test_format_paragraph_with_breaks() {
        let html = HtmlFormatter::format(&format_response("**Water** daily\nin the *morning*"));

        assert_eq!(
            html,
            "<div class=\"mb-3\"><strong class=\"text-primary\">Water</strong> daily<br>in the <em>morning</em></div>"
        );
    }

    #[test]
    fn test_format_lists() {
        let html = HtmlFormatter::format(&format_response("1. Remove leaves\n\n* Tip one"));

        assert!(html.contains("<div class=\"mb-2\"><strong class=\"text-success\">1.</strong> Remove leaves</div>"));
        assert!(html.contains("<span class=\"text-success me-2\">•</span>Tip one</div>"));
        assert_eq!(html.matches("<div class=\"mb-3\">").count(), 2);
    }

    #[test]
    fn test_format_escapes_markup() {
        let html = HtmlFormatter::format(&format_response("Use <script> & \"quotes\""));

        assert!(html.contains("Use &lt;script&gt; &amp; &quot;quotes&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape_html_special_characters() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html("say \"hi\""), "say &quot;hi&quot;");
        assert!(!escape_html("it's").contains('\''));
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_blank_emphasis_renders_visibly() {
        let html = HtmlFormatter::format(&format_response("Mix ** then"));

        assert_eq!(html, "<div class=\"mb-3\">Mix ** then</div>");
    }
}
