use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::High => "high",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(BudgetTier::Low),
            "medium" => Ok(BudgetTier::Medium),
            "high" => Ok(BudgetTier::High),
            other => Err(format!("Unknown budget tier: {}", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

impl BudgetRange {
    pub fn usd(min: u32, max: u32) -> Self {
        Self {
            min,
            max,
            currency: "USD".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BudgetTiers {
    pub low: BudgetRange,
    pub medium: BudgetRange,
    pub high: BudgetRange,
}

impl BudgetTiers {
    pub fn tier(&self, tier: BudgetTier) -> &BudgetRange {
        match tier {
            BudgetTier::Low => &self.low,
            BudgetTier::Medium => &self.medium,
            BudgetTier::High => &self.high,
        }
    }
}

/// Travel interest tag.
///
/// The six named tags are what the preference form offers. Places coming from
/// OpenTripMap carry free-form "kinds" which end up in `Other`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Interest {
    Adventure,
    Beaches,
    Culture,
    Food,
    Nature,
    Relaxation,
    Other(String),
}

impl Interest {
    pub fn as_str(&self) -> &str {
        match self {
            Interest::Adventure => "adventure",
            Interest::Beaches => "beaches",
            Interest::Culture => "culture",
            Interest::Food => "food",
            Interest::Nature => "nature",
            Interest::Relaxation => "relaxation",
            Interest::Other(tag) => tag,
        }
    }
}

impl From<String> for Interest {
    fn from(tag: String) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "adventure" => Interest::Adventure,
            "beaches" => Interest::Beaches,
            "culture" => Interest::Culture,
            "food" => Interest::Food,
            "nature" => Interest::Nature,
            "relaxation" => Interest::Relaxation,
            _ => Interest::Other(tag.trim().to_string()),
        }
    }
}

impl From<&str> for Interest {
    fn from(tag: &str) -> Self {
        Interest::from(tag.to_string())
    }
}

impl From<Interest> for String {
    fn from(interest: Interest) -> Self {
        interest.as_str().to_string()
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: String,
    pub best_time_to_visit: String,
    pub budget: BudgetTiers,
    pub interests: Vec<Interest>,
    pub top_attractions: Vec<Attraction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_link: Option<String>,
    pub coordinates: Coordinates,
}

impl Destination {
    pub fn shares_interest(&self, interests: &[Interest]) -> bool {
        self.interests.iter().any(|interest| interests.contains(interest))
    }
}

/// A catalog pick together with the budget range of the traveller's tier.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RandomPick {
    #[serde(flatten)]
    pub destination: Destination,
    pub selected_budget: BudgetRange,
}

impl RandomPick {
    pub fn new(destination: &Destination, tier: BudgetTier) -> Self {
        Self {
            destination: destination.clone(),
            selected_budget: destination.budget.tier(tier).clone(),
        }
    }
}

/// A destination found near the traveller, with distance information attached.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NearbyDestination {
    #[serde(flatten)]
    pub destination: Destination,
    pub distance_km: Option<f64>,
    pub travel_options: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationName {
    pub city: String,
    pub country: String,
    pub country_code: String,
    pub display_name: String,
}
