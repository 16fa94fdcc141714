use serde::{Deserialize, Serialize};

use crate::models::destination::{BudgetTier, Coordinates, Interest};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripDuration {
    #[serde(rename = "weekend")]
    Weekend,
    #[default]
    #[serde(rename = "1 week")]
    OneWeek,
    #[serde(rename = "2 weeks")]
    TwoWeeks,
}

impl TripDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripDuration::Weekend => "weekend",
            TripDuration::OneWeek => "1 week",
            TripDuration::TwoWeeks => "2 weeks",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    Domestic,
    #[default]
    International,
}

impl TravelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelType::Domestic => "domestic",
            TravelType::International => "international",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub budget: BudgetTier,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub duration: TripDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_type: Option<TravelType>,
}

impl UserPreferences {
    pub fn travel_type(&self) -> TravelType {
        self.travel_type.unwrap_or_default()
    }

    pub fn departure_city(&self) -> Option<&str> {
        self.departure_city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}

/// Body of `POST /api/recommendations/random`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RandomPickRequest {
    pub preferences: UserPreferences,
    #[serde(default)]
    pub user_location: Option<Coordinates>,
    /// The destination currently shown, so "randomize again" never repeats it.
    #[serde(default)]
    pub exclude_id: Option<String>,
}

/// Body of `POST /api/ai-recommendations`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendationRequest {
    pub preferences: UserPreferences,
    #[serde(default)]
    pub user_location: Option<String>,
}
