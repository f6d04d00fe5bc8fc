use serde::Serialize;

use crate::response::formatters::HtmlFormatter;
use crate::response::types::{Block, FormattedResponse};

/// Chat payload: rendered markup for the page, plain text for previews and
/// the block structure for clients that render themselves
#[derive(Debug, Serialize)]
pub struct ChatPayload<'a> {
    pub html: String,
    pub text: String,
    pub blocks: &'a [Block],
}

impl<'a> From<&'a FormattedResponse> for ChatPayload<'a> {
    fn from(response: &'a FormattedResponse) -> Self {
        Self {
            html: HtmlFormatter::format(response),
            text: response.plain_text(),
            blocks: &response.blocks,
        }
    }
}

/// JSON formatter for formatted responses
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format response as a pretty-printed chat payload
    pub fn format(response: &FormattedResponse) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ChatPayload::from(response))
    }

    /// Same payload on one line, for streaming one message per line
    pub fn format_compact(response: &FormattedResponse) -> Result<String, serde_json::Error> {
        serde_json::to_string(&ChatPayload::from(response))
    }
}
