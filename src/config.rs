//! Runtime configuration for the binaries, read from the environment.
//!
//! - `RUST_LOG` - tracing filter (default `crop_advisor_rust=info,warn`)
//! - `ASSISTANT_MODEL` / `ASSISTANT_TEMPERATURE` / `ASSISTANT_MAX_TOKENS`
//! - `CLASSIFIER_SEED` - fixes the demo classifier's random sequence

use crate::assistant::ChatSettings;

pub const DEFAULT_LOG_FILTER: &str = "crop_advisor_rust=info,warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub chat: ChatSettings,
    pub classifier_seed: Option<u64>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ChatSettings::default();
        let chat = ChatSettings {
            model: lookup("ASSISTANT_MODEL").unwrap_or(defaults.model),
            temperature: parse_or(&lookup, "ASSISTANT_TEMPERATURE", defaults.temperature),
            max_output_tokens: parse_or(&lookup, "ASSISTANT_MAX_TOKENS", defaults.max_output_tokens),
        };
        let classifier_seed = parse_opt(&lookup, "CLASSIFIER_SEED");

        Self { chat, classifier_seed }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    parse_opt(lookup, key).unwrap_or(default)
}

/// `None` when the key is unset or its value does not parse
fn parse_opt<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}

/// Install the stderr tracing subscriber used by every binary
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
