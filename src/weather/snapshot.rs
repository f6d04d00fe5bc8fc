//! Weather Snapshot
//!
//! Point-in-time reading handed over by the weather collaborator. The advisor
//! only reads it; payload validation is the collaborator's job.

use serde::{Deserialize, Serialize};

/// Base URL for condition icons
const ICON_BASE_URL: &str = "http://openweathermap.org/img/wn";

/// Current conditions at one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature (°C)
    pub temperature: f64,

    /// Relative humidity (%, 0-100)
    pub humidity: f64,

    /// Wind speed, in whatever unit the provider reports
    #[serde(alias = "windSpeed")]
    pub wind_speed: f64,

    /// Free-text condition, e.g. "Light Rain" (matched case-insensitively)
    #[serde(alias = "conditionDescription")]
    pub description: String,
}

impl WeatherSnapshot {
    pub fn new(temperature: f64, humidity: f64, wind_speed: f64, description: impl Into<String>) -> Self {
        Self {
            temperature,
            humidity,
            wind_speed,
            description: description.into(),
        }
    }
}

/// Icon image URL for a provider icon code (e.g. "10d")
pub fn icon_url(icon_code: &str) -> String {
    format!("{}/{}@2x.png", ICON_BASE_URL, icon_code)
}
