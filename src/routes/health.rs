use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::config::{mask_secret, AppConfig};
use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

impl ServiceStatus {
    fn ok(details: String) -> Self {
        Self {
            status: "ok".to_string(),
            details: Some(details),
        }
    }

    fn error(details: String) -> Self {
        Self {
            status: "error".to_string(),
            details: Some(details),
        }
    }
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let config = &state.config;
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    health
        .services
        .insert("opentripmap".to_string(), check_opentripmap(config));
    health.services.insert("groq".to_string(), check_groq(config));
    health
        .services
        .insert("toolhouse".to_string(), check_toolhouse(config));
    health.services.insert(
        "nominatim".to_string(),
        ServiceStatus::ok(format!("Using {}", config.nominatim_base_url)),
    );

    // Toolhouse is optional; recommendations still work without it.
    if health
        .services
        .iter()
        .any(|(name, service)| name != "toolhouse" && service.status != "ok")
    {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_key(key: Option<&str>, label: &str, var: &str) -> ServiceStatus {
    match key {
        Some(key) => ServiceStatus::ok(format!("{} key configured ({})", label, mask_secret(key))),
        None => ServiceStatus::error(format!("{} not configured", var)),
    }
}

fn check_opentripmap(config: &AppConfig) -> ServiceStatus {
    check_key(
        config.opentripmap_api_key.as_deref(),
        "OpenTripMap",
        "OPENTRIPMAP_API_KEY",
    )
}

fn check_groq(config: &AppConfig) -> ServiceStatus {
    match &config.groq_api_key {
        Some(key) => ServiceStatus::ok(format!(
            "Groq key configured ({}), model {}",
            mask_secret(key),
            config.groq_model
        )),
        None => ServiceStatus::error("GROQ_API_KEY not configured".to_string()),
    }
}

fn check_toolhouse(config: &AppConfig) -> ServiceStatus {
    check_key(
        config.toolhouse_api_key.as_deref(),
        "Toolhouse",
        "TOOLHOUSE_API_KEY",
    )
}
