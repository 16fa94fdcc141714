//! OpenTripMap lookups mapped into catalog-shaped destinations.
//!
//! OpenTripMap knows nothing about budgets or seasons, so mapped places get
//! the default tiers below and "All year" as the best time to visit.

use futures::future::join_all;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::destination::{
    Attraction, BudgetRange, BudgetTier, BudgetTiers, Coordinates, Destination, Interest,
    NearbyDestination,
};
use crate::services::geo::{haversine_km, travel_options};

const PLACEHOLDER_IMAGE: &str = "/placeholder-destination.jpg";
const NO_DESCRIPTION: &str = "No description available";
const ALL_YEAR: &str = "All year";

pub const DEFAULT_RADIUS_M: u32 = 100_000;
pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_KINDS: &str = "interesting_places";

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct PlacePoint {
    pub lat: f64,
    pub lon: f64,
}

/// Entry of a radius search.
#[derive(Debug, Deserialize, Clone)]
pub struct RadiusPlace {
    pub xid: String,
    #[serde(default)]
    pub name: String,
    /// Meters from the search origin.
    #[serde(default)]
    pub dist: Option<f64>,
    pub point: PlacePoint,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlaceAddress {
    pub country: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WikipediaExtract {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlacePreview {
    pub source: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlaceDetail {
    #[serde(default)]
    pub xid: String,
    pub name: Option<String>,
    pub address: Option<PlaceAddress>,
    pub wikipedia_extracts: Option<WikipediaExtract>,
    pub preview: Option<PlacePreview>,
    pub kinds: Option<String>,
    /// Link to the place's OpenTripMap page.
    pub otm: Option<String>,
    pub point: Option<PlacePoint>,
}

impl PlaceDetail {
    fn country_code(&self) -> Option<&str> {
        self.address.as_ref()?.country_code.as_deref()
    }

    fn country(&self) -> Option<&str> {
        self.address.as_ref()?.country.as_deref()
    }

    fn is_in_country(&self, country: &str) -> bool {
        let country = country.trim();
        !country.is_empty()
            && (self
                .country_code()
                .is_some_and(|code| code.eq_ignore_ascii_case(country))
                || self
                    .country()
                    .is_some_and(|name| name.eq_ignore_ascii_case(country)))
    }
}

#[derive(Debug, Clone)]
pub struct NearbySearch {
    pub origin: Coordinates,
    /// Traveller's country, as an ISO code or a name.
    pub country: Option<String>,
    pub domestic: bool,
    pub radius_m: u32,
    pub limit: u32,
    pub kinds: String,
    pub budget: Option<BudgetTier>,
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct NearbyResults {
    pub destinations: Vec<NearbyDestination>,
    pub domestic: Vec<NearbyDestination>,
    pub international: Vec<NearbyDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetTier>,
}

pub fn default_budget_tiers() -> BudgetTiers {
    BudgetTiers {
        low: BudgetRange::usd(0, 1000),
        medium: BudgetRange::usd(1000, 3000),
        high: BudgetRange::usd(3000, 10000),
    }
}

/// Map an OpenTripMap detail record into a `Destination`.
///
/// `listed` is the radius-search entry the detail was fetched for, used when
/// the detail record lacks a name or coordinates.
pub fn to_destination(detail: &PlaceDetail, listed: Option<&RadiusPlace>) -> Destination {
    let name = detail
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| listed.map(|p| p.name.clone()))
        .unwrap_or_default();

    let id = if detail.xid.is_empty() {
        listed.map(|p| p.xid.clone()).unwrap_or_default()
    } else {
        detail.xid.clone()
    };

    let coordinates = detail
        .point
        .or_else(|| listed.map(|p| p.point))
        .map(|p| Coordinates::new(p.lat, p.lon))
        .unwrap_or(Coordinates::new(0.0, 0.0));

    let interests = detail
        .kinds
        .as_deref()
        .map(|kinds| {
            kinds
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(Interest::from)
                .collect()
        })
        .unwrap_or_default();

    let top_attractions = if detail.otm.is_some() {
        vec![Attraction {
            name: name.clone(),
            description: String::new(),
            image_url: String::new(),
        }]
    } else {
        Vec::new()
    };

    Destination {
        id,
        name,
        country: detail.country().unwrap_or_default().to_string(),
        description: detail
            .wikipedia_extracts
            .as_ref()
            .and_then(|w| w.text.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        image_url: detail
            .preview
            .as_ref()
            .and_then(|p| p.source.clone())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        best_time_to_visit: ALL_YEAR.to_string(),
        budget: default_budget_tiers(),
        interests,
        top_attractions,
        flight_link: None,
        hotel_link: None,
        tour_link: None,
        coordinates,
    }
}

fn with_distance(destination: Destination, distance_km: f64) -> NearbyDestination {
    NearbyDestination {
        destination,
        distance_km: Some(distance_km),
        travel_options: Some(travel_options(distance_km).to_string()),
    }
}

/// Split mapped places into domestic / international and pick the requested side.
pub fn classify(
    places: Vec<(PlaceDetail, NearbyDestination)>,
    search: &NearbySearch,
) -> NearbyResults {
    let country = search.country.as_deref().unwrap_or_default();
    let (domestic, international): (Vec<_>, Vec<_>) = places
        .into_iter()
        .partition(|(detail, _)| detail.is_in_country(country));

    let domestic: Vec<NearbyDestination> = domestic.into_iter().map(|(_, d)| d).collect();
    let international: Vec<NearbyDestination> =
        international.into_iter().map(|(_, d)| d).collect();

    let destinations = if search.domestic {
        domestic.clone()
    } else {
        international.clone()
    };

    NearbyResults {
        destinations,
        domestic,
        international,
        budget: search.budget,
    }
}

#[derive(Clone)]
pub struct PlacesService {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    detail_limit: usize,
}

impl PlacesService {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.opentripmap_base_url.trim_end_matches('/').to_string(),
            api_key: config.opentripmap_api_key.clone(),
            detail_limit: config.place_detail_limit,
        })
    }

    fn api_key(&self) -> Result<&str, ApiError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ApiError::Config("OPENTRIPMAP_API_KEY not set".to_string()))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("Invalid OpenTripMap URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Config("OpenTripMap URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("apikey", self.api_key()?);
        Ok(url)
    }

    pub async fn nearby(&self, search: &NearbySearch) -> Result<NearbyResults, ApiError> {
        let mut url = self.endpoint(&["places", "radius"])?;
        url.query_pairs_mut()
            .append_pair("radius", &search.radius_m.to_string())
            .append_pair("lon", &search.origin.lon.to_string())
            .append_pair("lat", &search.origin.lat.to_string())
            .append_pair("limit", &search.limit.to_string())
            .append_pair("kinds", &search.kinds)
            .append_pair("format", "json");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message: format!("OpenTripMap radius search failed: {}", status),
            });
        }
        let places: Vec<RadiusPlace> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse radius search: {}", e)))?;

        info!(
            "OpenTripMap returned {} places around ({:.4}, {:.4})",
            places.len(),
            search.origin.lat,
            search.origin.lon
        );

        let lookups = places
            .iter()
            .take(self.detail_limit)
            .map(|place| async move {
                match self.fetch_detail(&place.xid).await {
                    Ok(detail) => Some((detail, place)),
                    Err(e) => {
                        warn!("Skipping place {}: {}", place.xid, e);
                        None
                    }
                }
            });

        let mapped: Vec<(PlaceDetail, NearbyDestination)> = join_all(lookups)
            .await
            .into_iter()
            .flatten()
            .map(|(detail, place)| {
                let destination = to_destination(&detail, Some(place));
                let distance_km = place
                    .dist
                    .map(|meters| meters / 1000.0)
                    .unwrap_or_else(|| haversine_km(search.origin, destination.coordinates));
                (detail, with_distance(destination, distance_km))
            })
            .collect();

        debug!("Mapped {} place details", mapped.len());
        Ok(classify(mapped, search))
    }

    pub async fn detail(&self, xid: &str) -> Result<Destination, ApiError> {
        let detail = self.fetch_detail(xid).await?;
        Ok(to_destination(&detail, None))
    }

    async fn fetch_detail(&self, xid: &str) -> Result<PlaceDetail, ApiError> {
        if xid.trim().is_empty() {
            return Err(ApiError::BadRequest("Missing destination id".to_string()));
        }
        let url = self.endpoint(&["places", "xid", xid])?;

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            debug!("OpenTripMap detail {} answered {}", xid, response.status());
            return Err(ApiError::NotFound("Destination not found".to_string()));
        }

        response
            .json::<PlaceDetail>()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse place detail: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(value: serde_json::Value) -> PlaceDetail {
        serde_json::from_value(value).unwrap()
    }

    fn listed() -> RadiusPlace {
        serde_json::from_value(json!({
            "xid": "R123",
            "name": "Old Bridge",
            "dist": 1520.5,
            "point": {"lat": 43.337, "lon": 17.815},
            "kinds": "bridges,architecture"
        }))
        .unwrap()
    }

    fn search(domestic: bool) -> NearbySearch {
        NearbySearch {
            origin: Coordinates::new(43.34, 17.81),
            country: Some("BA".to_string()),
            domestic,
            radius_m: DEFAULT_RADIUS_M,
            limit: DEFAULT_LIMIT,
            kinds: DEFAULT_KINDS.to_string(),
            budget: None,
        }
    }

    #[test]
    fn test_full_detail_mapping() {
        let detail = detail(json!({
            "xid": "R123",
            "name": "Stari Most",
            "address": {"country": "Bosnia and Herzegovina", "country_code": "ba"},
            "wikipedia_extracts": {"text": "A rebuilt 16th-century bridge."},
            "preview": {"source": "https://example.com/most.jpg"},
            "kinds": "bridges, architecture,,interesting_places",
            "otm": "https://opentripmap.com/en/card/R123",
            "point": {"lat": 43.3373, "lon": 17.8150}
        }));
        let destination = to_destination(&detail, None);

        assert_eq!(destination.id, "R123");
        assert_eq!(destination.name, "Stari Most");
        assert_eq!(destination.country, "Bosnia and Herzegovina");
        assert_eq!(destination.description, "A rebuilt 16th-century bridge.");
        assert_eq!(destination.image_url, "https://example.com/most.jpg");
        assert_eq!(destination.best_time_to_visit, "All year");
        assert_eq!(
            destination.interests,
            vec![
                Interest::Other("bridges".into()),
                Interest::Other("architecture".into()),
                Interest::Other("interesting_places".into()),
            ]
        );
        assert_eq!(destination.top_attractions.len(), 1);
        assert_eq!(destination.top_attractions[0].name, "Stari Most");
        assert_eq!(destination.budget.medium, BudgetRange::usd(1000, 3000));
    }

    #[test]
    fn test_sparse_detail_uses_fallbacks() {
        let detail = detail(json!({"name": ""}));
        let place = listed();
        let destination = to_destination(&detail, Some(&place));

        assert_eq!(destination.id, "R123");
        assert_eq!(destination.name, "Old Bridge");
        assert_eq!(destination.country, "");
        assert_eq!(destination.description, "No description available");
        assert_eq!(destination.image_url, "/placeholder-destination.jpg");
        assert!(destination.interests.is_empty());
        assert!(destination.top_attractions.is_empty());
        assert_eq!(destination.coordinates, Coordinates::new(43.337, 17.815));
    }

    #[test]
    fn test_classify_splits_by_country() {
        let home = detail(json!({"xid": "A", "name": "Mostar", "address": {"country_code": "ba"}}));
        let abroad = detail(json!({"xid": "B", "name": "Dubrovnik", "address": {"country": "Croatia", "country_code": "hr"}}));
        let places = vec![
            (home.clone(), with_distance(to_destination(&home, None), 5.0)),
            (abroad.clone(), with_distance(to_destination(&abroad, None), 95.0)),
        ];

        let results = classify(places.clone(), &search(true));
        assert_eq!(results.domestic.len(), 1);
        assert_eq!(results.international.len(), 1);
        assert_eq!(results.destinations[0].destination.id, "A");

        let results = classify(places, &search(false));
        assert_eq!(results.destinations[0].destination.id, "B");
        assert_eq!(
            results.destinations[0].travel_options.as_deref(),
            Some("1-hour flight | 2-hour drive | Train available")
        );
    }

    #[test]
    fn test_classify_without_country_is_all_international() {
        let place = detail(json!({"xid": "A", "address": {"country_code": "ba"}}));
        let mut search = search(true);
        search.country = None;

        let results = classify(
            vec![(place.clone(), with_distance(to_destination(&place, None), 1.0))],
            &search,
        );
        assert!(results.domestic.is_empty());
        assert!(results.destinations.is_empty());
        assert_eq!(results.international.len(), 1);
    }

    #[test]
    fn test_missing_api_key_is_reported() {
        let service = PlacesService::new(&AppConfig::default()).unwrap();
        let result = tokio_test::block_on(service.detail("R123"));
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_endpoint_escapes_ids() {
        let config = AppConfig {
            opentripmap_api_key: Some("key".to_string()),
            ..AppConfig::default()
        };
        let service = PlacesService::new(&config).unwrap();
        let url = service.endpoint(&["places", "xid", "a/b c"]).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.opentripmap.com/0.1/en/places/xid/a%2Fb%20c?apikey=key"
        );
    }
}
