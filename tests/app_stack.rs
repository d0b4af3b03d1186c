//! The fully assembled router from app::build_router, with every
//! middleware layer applied.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use clinic_api::app::build_router;
use clinic_api::config::{AppEnv, Config};
use clinic_api::services::auth::revocation::MemoryRevocationList;
use clinic_api::state::AppState;

fn dev_config() -> Config {
    Config {
        addr: "0.0.0.0:0".parse().unwrap(),
        app_env: AppEnv::Development,
        cors_allowed_origins: vec![],
        revocation_store_url: None,
        revocation_key_prefix: "auth:revoked".to_string(),
    }
}

fn full_app(revocation: MemoryRevocationList) -> Router {
    let state = AppState::new(Arc::new(revocation));
    build_router(state, &dev_config())
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = full_app(MemoryRevocationList::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert!(headers.contains_key("x-request-id"));
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["referrer-policy"], "no-referrer");
}

#[tokio::test]
async fn revocation_gate_is_wired_into_the_full_stack() {
    let list = MemoryRevocationList::new();
    list.revoke("stale-session");

    let app = full_app(list);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/appointments")
                .header(header::AUTHORIZATION, "Bearer stale-session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "Token has been invalidated (logged out).",
            "statusCode": 401
        })
    );
}
