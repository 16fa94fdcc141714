use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::warn;
use serde::Deserialize;

use crate::models::destination::{Coordinates, Interest};
use crate::services::catalog_service::{CatalogFilter, CatalogSort};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CatalogQuery {
    /// Comma-separated interest tags.
    interests: Option<String>,
    search: Option<String>,
    #[serde(default)]
    sort: CatalogSort,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl CatalogQuery {
    fn into_filter(self) -> CatalogFilter {
        let interests = self
            .interests
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|tag| !tag.trim().is_empty())
            .map(Interest::from)
            .collect();

        let origin = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)).filter(Coordinates::is_valid),
            _ => None,
        };

        CatalogFilter {
            interests,
            search: self.search,
            sort: self.sort,
            origin,
        }
    }
}

pub async fn list(state: web::Data<AppState>, query: web::Query<CatalogQuery>) -> impl Responder {
    let filter = query.into_inner().into_filter();
    HttpResponse::Ok().json(state.catalog.list(&filter))
}

pub async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.get(&id) {
        Ok(destination) => HttpResponse::Ok().json(destination),
        Err(err) => {
            warn!("Catalog lookup for {} failed: {}", id, err);
            err.error_response()
        }
    }
}

pub async fn related(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.related(&id) {
        Ok(destinations) => HttpResponse::Ok().json(destinations),
        Err(err) => {
            warn!("Related lookup for {} failed: {}", id, err);
            err.error_response()
        }
    }
}
