mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::TestApp;

#[actix_rt::test]
async fn test_health_reports_missing_keys() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["opentripmap"]["status"], "error");
    assert_eq!(body["services"]["groq"]["status"], "error");
    assert_eq!(body["services"]["nominatim"]["status"], "ok");
}

#[actix_rt::test]
async fn test_catalog_lists_everything_by_name() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/catalog").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let destinations = body.as_array().unwrap();
    assert_eq!(destinations.len(), 8);
    assert_eq!(destinations[0]["name"], "Bali");
    assert!(destinations[0]["bestTimeToVisit"].is_string());
    assert!(destinations[0]["budget"]["low"]["min"].is_number());
}

#[actix_rt::test]
async fn test_catalog_filters_by_interest_and_search() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/catalog?interests=beaches,food&search=cape")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["cape-town-south-africa"]);
}

#[actix_rt::test]
async fn test_blank_interest_tags_are_ignored() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/catalog?interests=,%20,")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 8);

    let req = test::TestRequest::get()
        .uri("/api/catalog?interests=,nature,")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["id"].as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "bali-indonesia",
            "cape-town-south-africa",
            "kyoto-japan",
            "reykjavik-iceland"
        ]
    );
}

#[actix_rt::test]
async fn test_catalog_rejects_unknown_sort() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/catalog?sort=price")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn test_catalog_entry_and_related() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/kyoto-japan")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["country"], "Japan");

    let req = test::TestRequest::get()
        .uri("/api/catalog/kyoto-japan/related")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    let related = body.as_array().unwrap();
    assert!(!related.is_empty() && related.len() <= 3);
    assert!(related.iter().all(|d| d["id"] != "kyoto-japan"));
}

#[actix_rt::test]
async fn test_unknown_catalog_entry() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/atlantis")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Destination not found");
}

#[actix_rt::test]
async fn test_random_pick_matches_interests() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/recommendations/random")
        .set_json(&json!({
            "preferences": {
                "budget": "medium",
                "interests": ["relaxation"],
                "duration": "1 week"
            },
            "excludeId": "bali-indonesia"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_ne!(body["id"], "bali-indonesia");
    assert_eq!(body["selectedBudget"], body["budget"]["medium"]);
    assert_eq!(body["selectedBudget"]["currency"], "USD");
    assert!(body["interests"]
        .as_array()
        .unwrap()
        .contains(&json!("relaxation")));
}

#[actix_rt::test]
async fn test_random_pick_without_interests() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/recommendations/random")
        .set_json(&json!({
            "preferences": {"budget": "high", "interests": [], "duration": "weekend"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Please select at least one interest");
}

#[actix_rt::test]
async fn test_random_pick_with_nothing_left() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // From Lisbon on a low budget, Barcelona is the only beach in range.
    let req = test::TestRequest::post()
        .uri("/api/recommendations/random")
        .set_json(&json!({
            "preferences": {"budget": "low", "interests": ["beaches"], "duration": "weekend"},
            "userLocation": {"lat": 38.7223, "lon": -9.1393},
            "excludeId": "barcelona-spain"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "No destinations match your preferences. Please try different options."
    );
}

#[actix_rt::test]
async fn test_malformed_body_is_a_json_error() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/recommendations/random")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"preferences\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}
