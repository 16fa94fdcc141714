use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::json;

use crate::models::ai_destination::AiRecommendations;
use crate::models::preferences::AiRecommendationRequest;
use crate::state::AppState;

pub async fn recommend(
    state: web::Data<AppState>,
    body: web::Json<AiRecommendationRequest>,
) -> impl Responder {
    let request = body.into_inner();

    match state
        .ai
        .recommend(&request.preferences, request.user_location.as_deref())
        .await
    {
        Ok(destinations) => HttpResponse::Ok().json(AiRecommendations { destinations }),
        Err(err) => {
            error!("AI recommendation failed: {}", err);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch AI recommendations",
                "destinations": []
            }))
        }
    }
}
