//! End-to-end HTTP scenarios against PostgreSQL

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::collections::BTreeSet;
use std::sync::Arc;
use tower::ServiceExt;

use aurumbank_backend::build_app;
use aurumbank_backend::config::{Config, Environment};
use aurumbank_backend::middleware::{AdminIdList, TELEGRAM_USER_HEADER};
use aurumbank_backend::state::AppState;

const ADMIN_ID: i64 = 4242;

async fn app() -> Router {
    let db = common::isolated_db().await;
    let state = AppState::new(db, Arc::new(AdminIdList::new([ADMIN_ID])));
    state.catalog_service.initialize(false).await.unwrap();
    state.contact_store.ensure_schema().await.unwrap();

    let config = Config {
        database_url: String::new(),
        environment: Environment::Development,
        host: "127.0.0.1".to_string(),
        port: 8000,
        db_max_connections: 4,
        cors_allowed_origins: None,
        log_level: "info".to_string(),
        admin_ids: BTreeSet::from([ADMIN_ID]),
        static_dir: None,
        seed_demo_data: false,
    };
    build_app(state, &config)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn admin_get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(TELEGRAM_USER_HEADER, ADMIN_ID.to_string())
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_seed_consumer_catalog_then_info() {
    let app = app().await;

    let (status, body) = send(&app, post("/api/consumer-loans/seed", serde_json::json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["count"], 3);

    let (status, body) = send(&app, post("/api/consumer-loans/seed", serde_json::json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "info");
    assert_eq!(body["count"], 3);

    let (_, body) = send(&app, get("/api/consumer-loans")).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["loans"][0]["name"], "Кредит на любые цели");
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_delete_missing_loan_is_not_found() {
    let app = app().await;
    send(&app, post("/api/consumer-loans/seed", serde_json::json!({}))).await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/consumer-loans/999")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");

    let (_, body) = send(&app, get("/api/consumer-loans")).await;
    assert_eq!(body["count"], 3);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_create_get_update_delete_loan() {
    let app = app().await;
    let loan = serde_json::json!({
        "name": "Кредит на образование",
        "rate": "от 7% годовых",
        "term": "до 10 лет",
        "amount": "до 25 000 BYN",
        "advantage": ["Отсрочка на время учёбы"],
        "details": "Оплата обучения в вузах Беларуси."
    });

    let (status, body) = send(&app, post("/api/preferential-loans", loan.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["loan"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, get(&format!("/api/preferential-loans/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loan"]["rate"], "от 7% годовых");
    assert_eq!(body["loan"]["advantage"][0], "Отсрочка на время учёбы");

    let mut changed = loan;
    changed["term"] = serde_json::json!("до 12 лет");
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/preferential-loans/{}", id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(changed.to_string()))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loan"]["term"], "до 12 лет");

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/preferential-loans/{}", id))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get(&format!("/api/preferential-loans/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_contact_request_visible_to_admin() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post(
            "/api/contact-request",
            serde_json::json!({"telegram_id": 12345, "username": "alice"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["request"]["status"], "new");

    let (status, body) = send(&app, admin_get("/api/contact-requests")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["requests"][0]["telegram_id"], 12345);
    assert_eq!(body["requests"][0]["status"], "new");

    let (_, body) = send(&app, admin_get("/api/contact-requests/summary")).await;
    assert_eq!(body["unprocessed"], 1);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_contact_request_with_long_username_is_created() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post(
            "/api/contact-request",
            serde_json::json!({"telegram_id": 5, "username": "a".repeat(300)}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["request"]["username"].as_str().unwrap().len(), 300);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_status_reports_connected_database() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");
}
