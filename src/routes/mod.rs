use actix_web::{error, web, HttpResponse};
use serde_json::json;

pub mod ai_recommendations;
pub mod catalog;
pub mod destinations;
pub mod geocode;
pub mod health;
pub mod recommendations;

fn bad_request(message: String, err: impl Into<actix_web::Error>) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": message }));
    error::InternalError::from_response(err.into(), response).into()
}

/// Register every route plus JSON-shaped extractor errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| bad_request(err.to_string(), err)),
    )
    .app_data(
        web::QueryConfig::default().error_handler(|err, _req| bad_request(err.to_string(), err)),
    )
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/api")
            .service(
                web::scope("/catalog")
                    .route("", web::get().to(catalog::list))
                    .route("/{id}", web::get().to(catalog::get_by_id))
                    .route("/{id}/related", web::get().to(catalog::related)),
            )
            .route(
                "/recommendations/random",
                web::post().to(recommendations::random_pick),
            )
            .route(
                "/ai-recommendations",
                web::post().to(ai_recommendations::recommend),
            )
            .service(
                web::scope("/destinations")
                    .route("", web::get().to(destinations::nearby))
                    .route("/{id}", web::get().to(destinations::get_by_id)),
            )
            .service(
                web::scope("/geocode")
                    .route("/reverse", web::get().to(geocode::reverse))
                    .route("/search", web::get().to(geocode::search)),
            ),
    );
}
