//! Local stand-ins for OpenTripMap, Nominatim, Groq and Toolhouse.
//!
//! Each server listens on an ephemeral port inside the running actix system
//! and records what it was asked.

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const OPENTRIPMAP_KEY: &str = "otm-test-key";
pub const GROQ_KEY: &str = "groq-test-key";
pub const TOOLHOUSE_KEY: &str = "toolhouse-test-key";
pub const TOOLHOUSE_USER: &str = "whereto-test";
pub const OVERLOADED_MODEL: &str = "overloaded-model";

#[derive(Default)]
pub struct OpenTripMapCalls {
    pub radius: AtomicUsize,
    pub details: AtomicUsize,
}

impl OpenTripMapCalls {
    pub fn details(&self) -> usize {
        self.details.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct AiCalls {
    pub chat_requests: Mutex<Vec<Value>>,
    pub tool_runs: AtomicUsize,
}

fn has_bearer(req: &HttpRequest, key: &str) -> bool {
    req.headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {}", key))
}

async fn radius(
    calls: web::Data<OpenTripMapCalls>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    calls.radius.fetch_add(1, Ordering::SeqCst);
    if query.get("apikey").map(String::as_str) != Some(OPENTRIPMAP_KEY) {
        return HttpResponse::Unauthorized().finish();
    }

    HttpResponse::Ok().json(json!([
        {
            "xid": "ES1",
            "name": "Sagrada Familia",
            "dist": 2500.0,
            "point": {"lat": 41.4036, "lon": 2.1744},
            "kinds": "churches"
        },
        {
            "xid": "FR1",
            "name": "Carcassonne",
            "dist": 250000.0,
            "point": {"lat": 43.2061, "lon": 2.3641}
        },
        {
            "xid": "BROKEN",
            "name": "Closed for renovation",
            "dist": 10.0,
            "point": {"lat": 41.39, "lon": 2.17}
        }
    ]))
}

async fn place_detail(
    calls: web::Data<OpenTripMapCalls>,
    path: web::Path<String>,
) -> HttpResponse {
    calls.details.fetch_add(1, Ordering::SeqCst);

    match path.into_inner().as_str() {
        "ES1" => HttpResponse::Ok().json(json!({
            "xid": "ES1",
            "name": "Sagrada Família",
            "address": {"country": "Spain", "country_code": "es"},
            "kinds": "churches,architecture",
            "otm": "https://opentripmap.com/en/card/ES1",
            "wikipedia_extracts": {"text": "Gaudí's unfinished basilica."},
            "preview": {"source": "https://example.com/sagrada.jpg"},
            "point": {"lat": 41.4036, "lon": 2.1744}
        })),
        "FR1" => HttpResponse::Ok().json(json!({
            "xid": "FR1",
            "name": "Carcassonne",
            "address": {"country": "France", "country_code": "fr"},
            "point": {"lat": 43.2061, "lon": 2.3641}
        })),
        _ => HttpResponse::InternalServerError().body("detail lookup failed"),
    }
}

/// Start a fake OpenTripMap. Returns its base URL and the call counters.
pub fn start_opentripmap() -> (String, web::Data<OpenTripMapCalls>) {
    let calls = web::Data::new(OpenTripMapCalls::default());
    let shared = calls.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(shared.clone())
            .route("/places/radius", web::get().to(radius))
            .route("/places/xid/{xid}", web::get().to(place_detail))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind fake OpenTripMap");

    let base_url = format!("http://{}", server.addrs()[0]);
    actix_rt::spawn(server.run());
    (base_url, calls)
}

async fn reverse(req: HttpRequest, query: web::Query<HashMap<String, String>>) -> HttpResponse {
    let identified = req
        .headers()
        .get("user-agent")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|agent| agent.starts_with("whereto-api/"));
    if !identified {
        return HttpResponse::Forbidden().finish();
    }
    if query.get("zoom").map(String::as_str) != Some("10") {
        return HttpResponse::BadRequest().finish();
    }

    HttpResponse::Ok().json(json!({
        "display_name": "Sitges, Garraf, Barcelona, Catalonia, Spain",
        "address": {"town": "Sitges", "county": "Garraf", "country": "Spain", "country_code": "es"}
    }))
}

async fn search(query: web::Query<HashMap<String, String>>) -> HttpResponse {
    match query.get("q").map(String::as_str) {
        Some("Paris") => HttpResponse::Ok().json(json!([
            {"lat": "48.8566", "lon": "2.3522", "display_name": "Paris, France"}
        ])),
        _ => HttpResponse::Ok().json(json!([])),
    }
}

/// Start a fake Nominatim and return its base URL.
pub fn start_nominatim() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/reverse", web::get().to(reverse))
            .route("/search", web::get().to(search))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind fake Nominatim");

    let base_url = format!("http://{}", server.addrs()[0]);
    actix_rt::spawn(server.run());
    base_url
}

pub const FINAL_REPLY: &str = "Destination 1:\nName: Tbilisi\nCountry: Georgia\nDescription: Sunny and cheap this week.\nWhy Visit:\n- Sulphur baths\n- Supra feasts\n";

async fn chat_completions(
    calls: web::Data<AiCalls>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    if !has_bearer(&req, GROQ_KEY) {
        return HttpResponse::Unauthorized().body("invalid api key");
    }
    let body = body.into_inner();
    calls
        .chat_requests
        .lock()
        .expect("chat log")
        .push(body.clone());

    if body["model"] == OVERLOADED_MODEL {
        return HttpResponse::ServiceUnavailable().body("model over capacity");
    }

    let has_tool_results = body["messages"]
        .as_array()
        .is_some_and(|messages| messages.iter().any(|m| m["role"] == "tool"));
    let offered_tools = body["tools"].as_array().is_some_and(|tools| !tools.is_empty());

    if offered_tools && !has_tool_results {
        return HttpResponse::Ok().json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "web_search", "arguments": "{\"query\":\"Tbilisi weather\"}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        }));
    }

    HttpResponse::Ok().json(json!({
        "choices": [{
            "message": {"role": "assistant", "content": FINAL_REPLY},
            "finish_reason": "stop"
        }]
    }))
}

fn valid_toolhouse_body(body: &Value) -> bool {
    body["provider"] == "openai"
        && body["bundle"] == "default"
        && body["metadata"]["id"] == TOOLHOUSE_USER
}

async fn get_tools(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if !has_bearer(&req, TOOLHOUSE_KEY) || !valid_toolhouse_body(&body) {
        return HttpResponse::BadRequest().body("bad tool request");
    }
    HttpResponse::Ok().json(json!([{
        "type": "function",
        "function": {
            "name": "web_search",
            "parameters": {"type": "object", "properties": {"query": {"type": "string"}}}
        }
    }]))
}

async fn run_tools(
    calls: web::Data<AiCalls>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    if !has_bearer(&req, TOOLHOUSE_KEY) || !valid_toolhouse_body(&body) {
        return HttpResponse::BadRequest().body("bad tool request");
    }
    if body["content"]["function"]["name"] != "web_search" {
        return HttpResponse::BadRequest().body("unknown tool");
    }
    calls.tool_runs.fetch_add(1, Ordering::SeqCst);

    HttpResponse::Ok().json(json!({
        "content": {
            "role": "tool",
            "tool_call_id": body["content"]["id"],
            "content": "Sunny, 24C"
        }
    }))
}

/// Start a fake that serves both the Groq and Toolhouse APIs.
pub fn start_ai() -> (String, web::Data<AiCalls>) {
    let calls = web::Data::new(AiCalls::default());
    let shared = calls.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(shared.clone())
            .route("/chat/completions", web::post().to(chat_completions))
            .route("/get_tools", web::post().to(get_tools))
            .route("/run_tools", web::post().to(run_tools))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind fake AI upstream");

    let base_url = format!("http://{}", server.addrs()[0]);
    actix_rt::spawn(server.run());
    (base_url, calls)
}
