//! Crop Advisor Content Core
//!
//! Shapes content for a plant-care assistant:
//! - `response/`: assistant text into structured, display-ready blocks
//! - `weather/`: current conditions into ordered farming advisories
//! - `diagnosis/`: disease catalogue, treatment lookup, classifier seam
//! - `assistant/`: chat provider seam with safe fallback replies
//!
//! External services (chat model, weather feed, image model) are consumed
//! through traits and passed in by the caller.

pub mod error;
pub mod config;
pub mod response;
pub mod weather;
pub mod diagnosis;
pub mod assistant;

// Re-export commonly used types
pub use error::ProviderError;
pub use response::{format_response, Block, FormattedResponse, HtmlFormatter, Inline, ListItem};
pub use weather::{advise, Advisory, AdvisoryCategory, AdvisoryList, WeatherProvider, WeatherSnapshot};
pub use diagnosis::{DemoClassifier, DiagnosisReport, DiseaseClassifier};
pub use assistant::{Assistant, ChatProvider, ChatRequest, ChatSettings};
