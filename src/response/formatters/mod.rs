//! Renderers for [`FormattedResponse`](super::FormattedResponse): chat-page
//! HTML, canonical markdown, and JSON for API consumers.

pub mod html;
pub mod markdown;
pub mod json;

pub use html::{escape_html, HtmlFormatter};
pub use markdown::MarkdownFormatter;
pub use json::{ChatPayload, JsonFormatter};
