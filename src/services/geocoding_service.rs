use log::{debug, info};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::destination::{Coordinates, LocationName};

const UNKNOWN_CITY: &str = "Unknown City";
const UNKNOWN_COUNTRY: &str = "Unknown Country";
const UNKNOWN_COUNTRY_CODE: &str = "Unknown";
const REVERSE_ZOOM: &str = "10";

#[derive(Debug, Deserialize, Default)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReverseResult {
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

fn location_name(address: NominatimAddress) -> LocationName {
    let city = [
        address.city,
        address.town,
        address.village,
        address.county,
    ]
    .into_iter()
    .flatten()
    .find(|name| !name.trim().is_empty())
    .unwrap_or_else(|| UNKNOWN_CITY.to_string());

    let country = address
        .country
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string());
    let country_code = address
        .country_code
        .filter(|c| !c.trim().is_empty())
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| UNKNOWN_COUNTRY_CODE.to_string());

    LocationName {
        display_name: format!("{}, {}", city, country),
        city,
        country,
        country_code,
    }
}

fn coordinates_from(result: &SearchResult) -> Result<Coordinates, ApiError> {
    let lat = result
        .lat
        .trim()
        .parse()
        .map_err(|_| ApiError::Parse(format!("Invalid latitude: {}", result.lat)))?;
    let lon = result
        .lon
        .trim()
        .parse()
        .map_err(|_| ApiError::Parse(format!("Invalid longitude: {}", result.lon)))?;
    Ok(Coordinates::new(lat, lon))
}

/// Nominatim client for turning coordinates into place names and back.
#[derive(Clone)]
pub struct GeocodingService {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodingService {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        // Nominatim rejects requests without an identifying User-Agent.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(config.geocoder_user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url: config.nominatim_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| ApiError::Config(format!("Invalid Nominatim URL: {}", e)))
    }

    pub async fn reverse(&self, coordinates: Coordinates) -> Result<LocationName, ApiError> {
        if !coordinates.is_valid() {
            return Err(ApiError::BadRequest("Invalid coordinates".to_string()));
        }

        let mut url = self.endpoint("reverse")?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &coordinates.lat.to_string())
            .append_pair("lon", &coordinates.lon.to_string())
            .append_pair("zoom", REVERSE_ZOOM);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message: format!("Reverse geocoding failed: {}", status),
            });
        }

        let result: ReverseResult = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse reverse geocoding: {}", e)))?;

        let location = location_name(result.address);
        debug!(
            "Resolved ({}, {}) to {}",
            coordinates.lat, coordinates.lon, location.display_name
        );
        Ok(location)
    }

    /// Coordinates of the best match for a free-text place name.
    pub async fn search(&self, query: &str) -> Result<Coordinates, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApiError::BadRequest("Missing search query".to_string()));
        }

        let mut url = self.endpoint("search")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message: format!("Geocoding search failed: {}", status),
            });
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse geocoding search: {}", e)))?;

        match results.first() {
            Some(result) => {
                info!("Geocoded '{}'", query);
                coordinates_from(result)
            }
            None => Err(ApiError::NotFound("Location not found".to_string())),
        }
    }
}
