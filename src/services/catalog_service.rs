use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::data::destinations::catalog;
use crate::error::ApiError;
use crate::models::destination::{BudgetTier, Coordinates, Destination, Interest};
use crate::models::preferences::UserPreferences;
use crate::services::geo::haversine_km;

const RELATED_LIMIT: usize = 3;
const NO_MATCH_MESSAGE: &str =
    "No destinations match your preferences. Please try different options.";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSort {
    #[default]
    Name,
    Distance,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub interests: Vec<Interest>,
    pub search: Option<String>,
    pub sort: CatalogSort,
    pub origin: Option<Coordinates>,
}

/// Recommendations drawn from the bundled destination list.
#[derive(Clone)]
pub struct CatalogService {
    destinations: &'static [Destination],
    max_budget_distance_km: f64,
}

impl CatalogService {
    pub fn new(max_budget_distance_km: f64) -> Self {
        Self::with_destinations(catalog(), max_budget_distance_km)
    }

    pub fn with_destinations(
        destinations: &'static [Destination],
        max_budget_distance_km: f64,
    ) -> Self {
        Self {
            destinations,
            max_budget_distance_km,
        }
    }

    pub fn list(&self, filter: &CatalogFilter) -> Vec<&'static Destination> {
        let needle = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut results: Vec<&'static Destination> = self
            .destinations
            .iter()
            .filter(|d| filter.interests.is_empty() || d.shares_interest(&filter.interests))
            .filter(|d| match &needle {
                Some(needle) => {
                    d.name.to_lowercase().contains(needle)
                        || d.country.to_lowercase().contains(needle)
                }
                None => true,
            })
            .collect();

        match (filter.sort, filter.origin) {
            (CatalogSort::Distance, Some(origin)) => results.sort_by(|a, b| {
                haversine_km(origin, a.coordinates).total_cmp(&haversine_km(origin, b.coordinates))
            }),
            _ => results.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        results
    }

    pub fn get(&self, id: &str) -> Result<&'static Destination, ApiError> {
        self.destinations
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| ApiError::NotFound("Destination not found".to_string()))
    }

    /// Other destinations sharing at least one interest with `id`, in catalog order.
    pub fn related(&self, id: &str) -> Result<Vec<&'static Destination>, ApiError> {
        let destination = self.get(id)?;
        Ok(self
            .destinations
            .iter()
            .filter(|d| d.id != destination.id)
            .filter(|d| d.shares_interest(&destination.interests))
            .take(RELATED_LIMIT)
            .collect())
    }

    /// Destinations that fit the preferences.
    ///
    /// Low-budget travellers with a known location only get destinations
    /// within `max_budget_distance_km`.
    pub fn matching(
        &self,
        preferences: &UserPreferences,
        origin: Option<Coordinates>,
    ) -> Vec<&'static Destination> {
        let nearby_only = match origin {
            Some(origin) if preferences.budget == BudgetTier::Low => Some(origin),
            _ => None,
        };

        self.destinations
            .iter()
            .filter(|d| d.shares_interest(&preferences.interests))
            .filter(|d| match nearby_only {
                Some(origin) => haversine_km(origin, d.coordinates) <= self.max_budget_distance_km,
                None => true,
            })
            .collect()
    }

    pub fn pick_random(
        &self,
        preferences: &UserPreferences,
        origin: Option<Coordinates>,
        exclude_id: Option<&str>,
    ) -> Result<&'static Destination, ApiError> {
        self.pick_random_with(&mut rand::thread_rng(), preferences, origin, exclude_id)
    }

    pub fn pick_random_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        preferences: &UserPreferences,
        origin: Option<Coordinates>,
        exclude_id: Option<&str>,
    ) -> Result<&'static Destination, ApiError> {
        if preferences.interests.is_empty() {
            return Err(ApiError::BadRequest(
                "Please select at least one interest".to_string(),
            ));
        }

        let candidates: Vec<&'static Destination> = self
            .matching(preferences, origin)
            .into_iter()
            .filter(|d| Some(d.id.as_str()) != exclude_id)
            .collect();

        debug!(
            "{} catalog destinations match interests {:?}",
            candidates.len(),
            preferences.interests
        );

        candidates
            .choose(rng)
            .copied()
            .ok_or_else(|| ApiError::NotFound(NO_MATCH_MESSAGE.to_string()))
    }
}
