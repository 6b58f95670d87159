// ABOUTME: HTTP integration tests for every route of the DOPA server
// ABOUTME: Requests go through the full router, including error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use chrono::{DateTime, Utc};
use common::{beer_profile, test_resources, user_data};
use dopa_server::routes;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use uuid::Uuid;

fn app() -> axum::Router {
    routes::router(test_resources())
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = AxumTestRequest::get("/health").send(app()).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "dopa-server");
    assert!(DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_ready_endpoint_checks_store() {
    let response = AxumTestRequest::get("/ready").send(app()).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["store"], true);
}

// ============================================================================
// POST /api/stats
// ============================================================================

#[tokio::test]
async fn test_stats_for_posted_profile() {
    let response = AxumTestRequest::post("/api/stats")
        .json(&json!({ "profile": beer_profile(), "elapsed_days": 7 }))
        .send(app())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["total_calories_avoided"], 980);
    assert_eq!(body["weight_lost_kg"], 0.13);
    assert_eq!(body["money_saved"], 50);
    assert_eq!(body["drinks_avoided_total"], 7);
}

#[tokio::test]
async fn test_stats_accepts_stored_column_names() {
    let response = AxumTestRequest::post("/api/stats")
        .json(&json!({
            "profile": {
                "alcool_types": ["Bière"],
                "alcool_frequence": "1 verre / jour",
                "budget_alcool_hebdo_eur": 50,
                "sommeil_base": 3,
                "energie_base": 3,
                "stress_base": 3,
                "frequence_cardiaque_repos": 70,
                "objectif_jours_sans_alcool": 90
            },
            "elapsedDays": 90
        }))
        .send(app())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["cardio_progression"], 100);
}

#[tokio::test]
async fn test_stats_without_profile_is_null() {
    let response = AxumTestRequest::post("/api/stats")
        .json(&json!({ "elapsed_days": 12 }))
        .send(app())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert!(body.is_null());
}

// ============================================================================
// Profile, dashboard, relapse
// ============================================================================

#[tokio::test]
async fn test_onboarding_then_dashboard_and_relapse() {
    let app = app();
    let user = Uuid::new_v4();

    let response = AxumTestRequest::post(&format!("/api/users/{user}/profile"))
        .json(&user_data(10))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);

    let response = AxumTestRequest::get(&format!("/api/users/{user}/profile"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["first_name"], "Alice");

    let response = AxumTestRequest::get(&format!("/api/users/{user}/dashboard"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert!(body["stats"]["elapsed_days"].as_u64().unwrap() >= 10);
    assert!(body["counter_display"].is_string());

    let response = AxumTestRequest::post(&format!("/api/users/{user}/relapse"))
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["stats"]["elapsed_days"], 0);
    assert!(body["start_date"].as_str().unwrap().parse::<DateTime<Utc>>().is_ok());
}

#[tokio::test]
async fn test_onboarding_twice_conflicts() {
    let app = app();
    let user = Uuid::new_v4();
    let uri = format!("/api/users/{user}/profile");

    AxumTestRequest::post(&uri).json(&user_data(1)).send(app.clone()).await;
    let response = AxumTestRequest::post(&uri).json(&user_data(1)).send(app).await;

    assert_eq!(response.status(), 409);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_invalid_onboarding_is_rejected_with_field() {
    let mut data = user_data(1);
    data.age = 8;

    let response = AxumTestRequest::post(&format!("/api/users/{}/profile", Uuid::new_v4()))
        .json(&data)
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(body["error"]["details"]["field"], "age");
}

#[tokio::test]
async fn test_dashboard_for_unknown_user_is_404() {
    let response = AxumTestRequest::get(&format!("/api/users/{}/dashboard", Uuid::new_v4()))
        .send(app())
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_emergency_task_round_trip() {
    let app = app();
    let user = Uuid::new_v4();
    AxumTestRequest::post(&format!("/api/users/{user}/profile"))
        .json(&user_data(2))
        .send(app.clone())
        .await;

    let response = AxumTestRequest::put(&format!("/api/users/{user}/emergency-task"))
        .json(&json!({ "task": "Appeler ma soeur" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);

    let response = AxumTestRequest::get(&format!("/api/users/{user}/emergency-tasks"))
        .send(app)
        .await;
    let tasks: Vec<Value> = response.json();
    assert_eq!(tasks.len(), 9);
    assert_eq!(tasks[0]["text"], "Appeler ma soeur");
    assert_eq!(tasks[0]["personal"], true);
}

// ============================================================================
// Badges
// ============================================================================

#[tokio::test]
async fn test_badge_catalog_and_filters() {
    let response = AxumTestRequest::get("/api/badges").send(app()).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["total"], 60);

    let response = AxumTestRequest::get("/api/badges?category=mechants")
        .send(app())
        .await;
    let body: Value = response.json();
    assert_eq!(body["total"], 5);
    assert_eq!(body["badges"][0]["villain_name"], "Jean-Michel Insistance");

    let response = AxumTestRequest::get("/api/badges?category=victoires&days=7")
        .send(app())
        .await;
    let body: Value = response.json();
    assert_eq!(body["total"], 4);
}

#[tokio::test]
async fn test_unknown_badge_category_is_bad_request() {
    let response = AxumTestRequest::get("/api/badges?category=pirates")
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_badge_usage_feeds_the_gallery() {
    let app = app();
    let user = Uuid::new_v4();

    let response = AxumTestRequest::post(&format!("/api/users/{user}/badges/usage"))
        .json(&json!({
            "badge_emoji": "🧃",
            "badge_text": "Mocktail hero.",
            "elapsed_days": 1
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["usage_key"], "🧃_Mocktail hero.");
    assert_eq!(
        body["share_message"],
        "🎉 1 jour sans alcool avec DOPA! Mocktail hero. 💪 #DOPA #JusteToi"
    );

    let response = AxumTestRequest::get(&format!("/api/users/{user}/badges"))
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["used_count"], 1);
    assert_eq!(body["total"], 60);
}

#[tokio::test]
async fn test_badge_usage_requires_emoji_and_text() {
    let response = AxumTestRequest::post(&format!("/api/users/{}/badges/usage", Uuid::new_v4()))
        .json(&json!({ "emoji": "", "text": "Mocktail hero." }))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_gallery_counts_shared_badges_with_commas() {
    let query = serde_urlencoded::to_string([
        ("shared", "🔥_Sobre, mais chaud."),
        ("shared", "💅_Sobre, mais stylé."),
        ("shared", "🍕_Apéro soft réussi"),
        ("shared", "👻_Not in the catalog"),
    ])
    .unwrap();

    let response = AxumTestRequest::get(&format!("/api/users/{}/badges?{query}", Uuid::new_v4()))
        .send(app())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    // The fire badge sits in both victories and sportifs
    assert_eq!(body["used_count"], 4);
    let victories = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["category"] == "victoires")
        .unwrap();
    assert_eq!(victories["used_count"], 1);
}

#[tokio::test]
async fn test_gallery_accepts_a_single_shared_key() {
    let query = serde_urlencoded::to_string([("shared", "🍕_Apéro soft réussi")]).unwrap();

    let response = AxumTestRequest::get(&format!("/api/users/{}/badges?{query}", Uuid::new_v4()))
        .send(app())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["used_count"], 1);
}

// ============================================================================
// Malformed requests
// ============================================================================

#[tokio::test]
async fn test_malformed_stats_body_returns_error_json() {
    let response = AxumTestRequest::post("/api/stats")
        .json(&json!({ "profile": null, "elapsed_days": -3 }))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert!(body["error"]["message"].as_str().unwrap().contains("elapsed_days"));
}

#[tokio::test]
async fn test_malformed_onboarding_body_returns_error_json() {
    let response = AxumTestRequest::post(&format!("/api/users/{}/profile", Uuid::new_v4()))
        .json(&json!({ "first_name": "Alice" }))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_invalid_catalog_days_returns_error_json() {
    let response = AxumTestRequest::get("/api/badges?days=soon").send(app()).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}
