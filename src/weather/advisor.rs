//! Farming Advice from Current Weather
//!
//! Four rule groups run in a fixed order (temperature, humidity, wind,
//! condition), each adding at most one advisory. The list order is the
//! evaluation order, not a severity ranking. When nothing fires the list holds
//! the single "normal conditions" entry.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::snapshot::WeatherSnapshot;

// ============================================================================
// Thresholds
// ============================================================================

const FROST_BELOW_C: f64 = 5.0;
const HEAT_ABOVE_C: f64 = 35.0;
const IDEAL_MIN_C: f64 = 15.0;
const IDEAL_MAX_C: f64 = 25.0;
const HUMID_ABOVE_PCT: f64 = 80.0;
const DRY_BELOW_PCT: f64 = 30.0;
const STRONG_WIND_ABOVE: f64 = 10.0;

/// One advisory per rule group, so four always fit inline
pub type AdvisoryList = SmallVec<[Advisory; 4]>;

/// Which rule produced an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryCategory {
    Frost,
    Heat,
    Ideal,
    HumidityHigh,
    HumidityLow,
    Wind,
    Rain,
    Clear,
    Cloudy,
    Normal,
}

impl AdvisoryCategory {
    pub fn glyph(self) -> &'static str {
        match self {
            AdvisoryCategory::Frost => "⚠️",
            AdvisoryCategory::Heat => "🌡️",
            AdvisoryCategory::Ideal => "🌱",
            AdvisoryCategory::HumidityHigh => "💧",
            AdvisoryCategory::HumidityLow => "🏜️",
            AdvisoryCategory::Wind => "💨",
            AdvisoryCategory::Rain => "🌧️",
            AdvisoryCategory::Clear => "☀️",
            AdvisoryCategory::Cloudy => "☁️",
            AdvisoryCategory::Normal => "🌾",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AdvisoryCategory::Frost => "Frost risk: Protect sensitive plants and consider covering crops.",
            AdvisoryCategory::Heat => "High temperature: Increase watering frequency and provide shade for sensitive plants.",
            AdvisoryCategory::Ideal => "Ideal growing conditions: Good time for planting and outdoor activities.",
            AdvisoryCategory::HumidityHigh => "High humidity: Monitor for fungal diseases and ensure good air circulation.",
            AdvisoryCategory::HumidityLow => "Low humidity: Increase irrigation and consider mulching to retain moisture.",
            AdvisoryCategory::Wind => "Strong winds: Secure tall plants and protect greenhouse structures.",
            AdvisoryCategory::Rain => "Rainy conditions: Good for soil moisture but watch for waterlogging.",
            AdvisoryCategory::Clear => "Clear skies: Excellent for field work and harvesting activities.",
            AdvisoryCategory::Cloudy => "Cloudy conditions: Good for transplanting as plants face less stress.",
            AdvisoryCategory::Normal => "Normal conditions: Continue with regular farming activities.",
        }
    }
}

/// A single farming recommendation tied to one fired rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub category: AdvisoryCategory,
    pub message: &'static str,
}

impl From<AdvisoryCategory> for Advisory {
    fn from(category: AdvisoryCategory) -> Self {
        Self {
            category,
            message: category.message(),
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category.glyph(), self.message)
    }
}

/// Derive the advisory list for a snapshot
pub fn advise(snapshot: &WeatherSnapshot) -> AdvisoryList {
    let mut advice = AdvisoryList::new();

    let rules = [
        temperature_rule(snapshot.temperature),
        humidity_rule(snapshot.humidity),
        wind_rule(snapshot.wind_speed),
        condition_rule(&snapshot.description),
    ];
    for category in rules.into_iter().flatten() {
        tracing::debug!(?category, "weather rule fired");
        advice.push(category.into());
    }

    if advice.is_empty() {
        advice.push(AdvisoryCategory::Normal.into());
    }
    advice
}

/// The 5..15 and 25..35 bands are quiet on purpose
fn temperature_rule(temp_c: f64) -> Option<AdvisoryCategory> {
    if temp_c < FROST_BELOW_C {
        Some(AdvisoryCategory::Frost)
    } else if temp_c > HEAT_ABOVE_C {
        Some(AdvisoryCategory::Heat)
    } else if (IDEAL_MIN_C..=IDEAL_MAX_C).contains(&temp_c) {
        Some(AdvisoryCategory::Ideal)
    } else {
        None
    }
}

fn humidity_rule(humidity_pct: f64) -> Option<AdvisoryCategory> {
    if humidity_pct > HUMID_ABOVE_PCT {
        Some(AdvisoryCategory::HumidityHigh)
    } else if humidity_pct < DRY_BELOW_PCT {
        Some(AdvisoryCategory::HumidityLow)
    } else {
        None
    }
}

fn wind_rule(wind_speed: f64) -> Option<AdvisoryCategory> {
    (wind_speed > STRONG_WIND_ABOVE).then_some(AdvisoryCategory::Wind)
}

/// First matching keyword wins: rain, then clear/sunny, then cloud
fn condition_rule(description: &str) -> Option<AdvisoryCategory> {
    let description = description.to_lowercase();
    if description.contains("rain") {
        Some(AdvisoryCategory::Rain)
    } else if description.contains("clear") || description.contains("sunny") {
        Some(AdvisoryCategory::Clear)
    } else if description.contains("cloud") {
        Some(AdvisoryCategory::Cloudy)
    } else {
        None
    }
}
