//! Shared types for the email generation pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Client ──────────────────────────────────────────────────────────

/// Where a client is in the buying process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyingStage {
    Browsing,
    Active,
    ReadyToOffer,
}

impl fmt::Display for BuyingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Browsing => "browsing",
            Self::Active => "active",
            Self::ReadyToOffer => "ready_to_offer",
        };
        f.write_str(label)
    }
}

/// How a client prefers to be spoken to. Drives prompt tone matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    Formal,
    Casual,
    Enthusiastic,
}

impl fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Enthusiastic => "enthusiastic",
        };
        f.write_str(label)
    }
}

/// A client record. Immutable input to the pipeline; owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub buying_stage: BuyingStage,
    pub preferences: Vec<String>,
    pub budget_range: String,
    pub lifestyle_notes: String,
    pub communication_style: CommunicationStyle,
}

// ── Property ────────────────────────────────────────────────────────

/// Kind of property being pitched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    Condo,
    Townhouse,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SingleFamily => "single-family home",
            Self::Condo => "condo",
            Self::Townhouse => "townhouse",
        };
        f.write_str(label)
    }
}

/// A property record. Immutable input to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub price: u64,
    pub beds: u32,
    pub baths: f32,
    pub sqft: u64,
    pub property_type: PropertyType,
    pub highlights: Vec<String>,
    pub neighborhood_description: String,
}

// ── Weather ─────────────────────────────────────────────────────────

/// Normalized weather for the property location.
///
/// Produced fresh per pipeline run, never cached across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Condition label, e.g. "Clear".
    pub condition: String,
    /// Temperature in degrees Fahrenheit.
    pub temperature: i32,
    /// One-line summary, e.g. "72°F with clear sky".
    pub short_summary: String,
}

impl WeatherSummary {
    /// Build a summary from a condition label, a lowercase description, and
    /// a rounded Fahrenheit temperature.
    pub fn from_parts(condition: &str, description: &str, temperature: i32) -> Self {
        Self {
            condition: condition.to_string(),
            temperature,
            short_summary: format!("{temperature}°F with {description}"),
        }
    }

    /// Build a summary from just a condition label; the description is the
    /// lowercased condition.
    pub fn new(condition: &str, temperature: i32) -> Self {
        Self::from_parts(condition, &condition.to_lowercase(), temperature)
    }
}

// ── Output ──────────────────────────────────────────────────────────

/// The generated outreach email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEmail {
    pub subject: String,
    pub body: String,
}

// ── Caller-facing request ───────────────────────────────────────────

/// Entry payload for one pipeline run.
///
/// Client and property are optional at the wire level so required-field
/// validation can happen before any I/O; the pipeline rejects `None` with a
/// caller-fault error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailRequest {
    pub client: Option<ClientRecord>,
    pub property: Option<PropertyRecord>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Client used across pipeline tests.
    pub fn sample_client() -> ClientRecord {
        ClientRecord {
            id: "client-1".into(),
            name: "Sarah Mitchell".into(),
            email: "sarah.mitchell@example.com".into(),
            buying_stage: BuyingStage::Active,
            preferences: vec!["open floor plan".into()],
            budget_range: "$450k-$550k".into(),
            lifestyle_notes: "Works from home, hosts friends on weekends".into(),
            communication_style: CommunicationStyle::Enthusiastic,
        }
    }

    /// Property used across pipeline tests.
    pub fn sample_property() -> PropertyRecord {
        PropertyRecord {
            id: "prop-1".into(),
            address: "1247 Oak Street".into(),
            city: "Austin".into(),
            state: "TX".into(),
            price: 525_000,
            beds: 3,
            baths: 2.5,
            sqft: 2_150,
            property_type: PropertyType::SingleFamily,
            highlights: vec!["Open floor plan".into(), "Large backyard".into()],
            neighborhood_description: "Quiet tree-lined streets near downtown".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(BuyingStage::ReadyToOffer).unwrap(),
            "ready_to_offer"
        );
        assert_eq!(
            serde_json::to_value(CommunicationStyle::Enthusiastic).unwrap(),
            "enthusiastic"
        );
        assert_eq!(
            serde_json::to_value(PropertyType::SingleFamily).unwrap(),
            "single_family"
        );
    }

    #[test]
    fn weather_summary_formats_temperature() {
        let weather = WeatherSummary::new("Clear", 72);
        assert_eq!(weather.short_summary, "72°F with clear");

        let detailed = WeatherSummary::from_parts("Clear", "clear sky", 72);
        assert_eq!(detailed.short_summary, "72°F with clear sky");
    }

    #[test]
    fn email_request_deserializes_without_notes() {
        let request: EmailRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(request.client.is_none());
        assert!(request.property.is_none());
        assert!(request.notes.is_none());
    }
}
