use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::{info, warn};

use crate::models::destination::{Coordinates, RandomPick};
use crate::models::preferences::RandomPickRequest;
use crate::state::AppState;

/// Pick one catalog destination at random. Sending back the previous pick as
/// `excludeId` gives a "randomize again" that never repeats it.
pub async fn random_pick(
    state: web::Data<AppState>,
    body: web::Json<RandomPickRequest>,
) -> impl Responder {
    let request = body.into_inner();
    let origin = request.user_location.filter(Coordinates::is_valid);

    match state
        .catalog
        .pick_random(&request.preferences, origin, request.exclude_id.as_deref())
    {
        Ok(destination) => {
            info!("Random pick: {}", destination.id);
            HttpResponse::Ok().json(RandomPick::new(destination, request.preferences.budget))
        }
        Err(err) => {
            warn!("Random pick failed: {}", err);
            err.error_response()
        }
    }
}
