//! Agricultural Chat Assistant Glue
//!
//! Builds the request for the chat collaborator, shapes whatever comes back
//! through [`format_response`], and swaps in a friendly message when the
//! provider fails or stays silent.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::response::{format_response, FormattedResponse};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2000;

pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't generate a response. Please try again.";
pub const PROVIDER_FAILURE_REPLY: &str = "I'm experiencing technical difficulties. Please try again later.";

pub const SYSTEM_PROMPT: &str = "You are an expert agricultural assistant specializing in:
- Plant disease identification and treatment
- Crop care and farming best practices
- Pest management and prevention
- Soil health and nutrition
- Weather-related farming advice
- Sustainable farming techniques

Provide helpful, accurate, and practical advice for farmers and gardeners.
Format your responses with clear structure:
- Use numbered lists for step-by-step instructions
- Use bullet points for key points
- Bold important terms with **bold text**
- Provide complete, detailed responses
Always prioritize plant and human safety and give comprehensive answers.";

/// Generation parameters shared by every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// One user turn as sent to the chat provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub system_prompt: &'a str,
    pub message: &'a str,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Generative model behind the assistant
pub trait ChatProvider {
    /// `Ok(None)` means the model produced no text
    fn generate(&self, request: &ChatRequest<'_>) -> Result<Option<String>, ProviderError>;
}

/// Chat assistant over an injected provider
pub struct Assistant<P> {
    provider: P,
    settings: ChatSettings,
}

impl<P: ChatProvider> Assistant<P> {
    pub fn new(provider: P, settings: ChatSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    pub fn request<'a>(&'a self, message: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.settings.model,
            system_prompt: SYSTEM_PROMPT,
            message,
            temperature: self.settings.temperature,
            max_output_tokens: self.settings.max_output_tokens,
        }
    }

    /// Ask the provider and return a display-ready reply; never fails
    pub fn reply(&self, message: &str) -> FormattedResponse {
        match self.provider.generate(&self.request(message)) {
            Ok(Some(text)) if !text.trim().is_empty() => format_response(&text),
            Ok(_) => {
                tracing::warn!("chat provider returned no text");
                FormattedResponse::message(EMPTY_REPLY)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error getting AI response");
                FormattedResponse::message(PROVIDER_FAILURE_REPLY)
            }
        }
    }
}
