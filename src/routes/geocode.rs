use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::warn;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::destination::Coordinates;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReverseQuery {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

pub async fn reverse(state: web::Data<AppState>, query: web::Query<ReverseQuery>) -> impl Responder {
    let (Some(lat), Some(lon)) = (query.lat, query.lon) else {
        return ApiError::BadRequest("Missing latitude or longitude".to_string()).error_response();
    };

    match state.geocoder.reverse(Coordinates::new(lat, lon)).await {
        Ok(location) => HttpResponse::Ok().json(location),
        Err(err) => {
            warn!("Reverse geocoding ({}, {}) failed: {}", lat, lon, err);
            err.error_response()
        }
    }
}

pub async fn search(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> impl Responder {
    let q = query.into_inner().q.unwrap_or_default();

    match state.geocoder.search(&q).await {
        Ok(coordinates) => HttpResponse::Ok().json(coordinates),
        Err(err) => {
            warn!("Geocoding search '{}' failed: {}", q, err);
            err.error_response()
        }
    }
}
