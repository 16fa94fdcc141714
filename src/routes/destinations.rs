use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::{error, warn};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::models::destination::{BudgetTier, Coordinates};
use crate::services::places_service::{
    NearbySearch, DEFAULT_KINDS, DEFAULT_LIMIT, DEFAULT_RADIUS_M,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NearbyQuery {
    lat: Option<f64>,
    lon: Option<f64>,
    country: Option<String>,
    #[serde(default)]
    domestic: bool,
    /// Meters.
    radius: Option<u32>,
    limit: Option<u32>,
    kinds: Option<String>,
    budget: Option<String>,
}

impl NearbyQuery {
    fn into_search(self) -> Result<NearbySearch, ApiError> {
        let (lat, lon) = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Err(ApiError::BadRequest(
                    "Missing latitude or longitude".to_string(),
                ))
            }
        };
        let origin = Coordinates::new(lat, lon);
        if !origin.is_valid() {
            return Err(ApiError::BadRequest("Invalid coordinates".to_string()));
        }

        let budget = match self.budget.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(tier) => Some(tier.parse::<BudgetTier>().map_err(ApiError::BadRequest)?),
        };

        Ok(NearbySearch {
            origin,
            country: self.country.filter(|c| !c.trim().is_empty()),
            domestic: self.domestic,
            radius_m: self.radius.unwrap_or(DEFAULT_RADIUS_M),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            kinds: self
                .kinds
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_KINDS.to_string()),
            budget,
        })
    }
}

/// Validation and not-found errors keep their own answer; anything that went
/// wrong upstream is a 500 with a route-specific message.
fn failure_response(err: &ApiError, message: &str) -> HttpResponse {
    match err {
        ApiError::BadRequest(_) | ApiError::NotFound(_) => err.error_response(),
        _ => HttpResponse::InternalServerError().json(json!({ "error": message })),
    }
}

pub async fn nearby(state: web::Data<AppState>, query: web::Query<NearbyQuery>) -> impl Responder {
    let search = match query.into_inner().into_search() {
        Ok(search) => search,
        Err(err) => return err.error_response(),
    };

    match state.places.nearby(&search).await {
        Ok(results) => HttpResponse::Ok().json(results),
        Err(err) => {
            error!("Nearby destination search failed: {}", err);
            failure_response(&err, "Failed to fetch destinations")
        }
    }
}

pub async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.places.detail(&id).await {
        Ok(destination) => HttpResponse::Ok().json(destination),
        Err(err) => {
            warn!("Destination detail {} failed: {}", id, err);
            failure_response(&err, "Failed to fetch destination details")
        }
    }
}
