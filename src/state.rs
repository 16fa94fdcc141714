use crate::config::AppConfig;
use crate::error::ApiError;
use crate::services::ai_service::AiRecommendationService;
use crate::services::catalog_service::CatalogService;
use crate::services::geocoding_service::GeocodingService;
use crate::services::places_service::PlacesService;

/// Shared application state handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: CatalogService,
    pub places: PlacesService,
    pub geocoder: GeocodingService,
    pub ai: AiRecommendationService,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Result<Self, ApiError> {
        let ai = AiRecommendationService::from_config(&config)?;
        Self::with_ai(config, ai)
    }

    /// Same as `from_config` but with a caller-supplied AI service.
    pub fn with_ai(config: AppConfig, ai: AiRecommendationService) -> Result<Self, ApiError> {
        Ok(Self {
            catalog: CatalogService::new(config.max_budget_distance_km),
            places: PlacesService::new(&config)?,
            geocoder: GeocodingService::new(&config)?,
            ai,
            config,
        })
    }
}
