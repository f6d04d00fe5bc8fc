//! Weather-Driven Farming Advice
//!
//! ## Architecture
//! - `snapshot.rs` - WeatherSnapshot (read-only input) + icon URL helper
//! - `advisor.rs` - threshold rules producing the ordered advisory list
//!
//! The weather feed itself is a collaborator behind [`WeatherProvider`].

pub mod snapshot;
pub mod advisor;

pub use snapshot::{icon_url, WeatherSnapshot};
pub use advisor::{advise, Advisory, AdvisoryCategory, AdvisoryList};

use crate::error::ProviderError;

/// Source of current conditions for a named location
pub trait WeatherProvider {
    /// `Ok(None)` means the provider knows no such location
    fn current(&self, location: &str) -> Result<Option<WeatherSnapshot>, ProviderError>;
}

/// Fetch conditions and derive advice; `None` signals "no weather data".
///
/// Provider failures are logged and folded into `None`, never surfaced.
pub fn farming_advice_for<P: WeatherProvider + ?Sized>(
    provider: &P,
    location: &str,
) -> Option<(WeatherSnapshot, AdvisoryList)> {
    match provider.current(location) {
        Ok(Some(snapshot)) => {
            let advice = advise(&snapshot);
            tracing::info!(location, advisories = advice.len(), "weather advice generated");
            Some((snapshot, advice))
        }
        Ok(None) => {
            tracing::warn!(location, "no weather data for location");
            None
        }
        Err(e) => {
            tracing::error!(location, error = %e, "Error fetching weather data");
            None
        }
    }
}
