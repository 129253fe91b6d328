//! Integration tests for bearer tokens and the parcel access policy.

mod helpers;

use chrono::Duration;
use http::StatusCode;
use serde_json::json;

use parcelhub_auth::jwt::JwtEncoder;
use parcelhub_entity::user::UserRole;

use helpers::{RECEIVER_ID, SENDER_ID, TELLER_ID};

fn create_body() -> serde_json::Value {
    json!({
        "customer_id": SENDER_ID,
        "receiver_id": RECEIVER_ID,
        "parcel": { "item": "Books", "cost": 20, "quantity": 3 }
    })
}

#[tokio::test]
async fn test_mutations_require_token() {
    let app = helpers::TestApp::new().await;
    app.seed_parcel(1, "PCL00001", false).await;

    let response = app
        .request("POST", "/api/parcels/create", Some(create_body()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["status"], "fail");
    assert_eq!(
        response.body["message"],
        "Authentication is required to create parcels"
    );

    let response = app
        .request(
            "PUT",
            "/api/parcels/PCL00001",
            Some(json!({ "sender_name": "Mallory" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("DELETE", "/api/parcels/PCL00001", None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let detail = app.request("GET", "/api/parcels/1", None, None).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.body["teller"]["id"], TELLER_ID);
}

#[tokio::test]
async fn test_expired_token_is_anonymous() {
    let app = helpers::TestApp::new().await;
    let token = JwtEncoder::new(&app.config.auth)
        .issue_with_ttl(TELLER_ID, UserRole::Teller, Duration::minutes(-10))
        .unwrap();

    let response = app
        .request("POST", "/api/parcels/create", Some(create_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_anonymous() {
    let app = helpers::TestApp::new().await;
    let mut other = app.config.auth.clone();
    other.jwt_secret = "someone-else".to_string();
    let token = JwtEncoder::new(&other).issue(TELLER_ID, UserRole::Teller).unwrap();

    let response = app
        .request("POST", "/api/parcels/create", Some(create_body()), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("POST", "/api/parcels/create", Some(create_body()), Some("not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unregistered_caller_cannot_create() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(500);

    let response = app
        .request("POST", "/api/parcels/create", Some(create_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Caller is not a registered user");
}

#[tokio::test]
async fn test_anonymous_write_is_unauthorized_whatever_the_body() {
    let app = helpers::TestApp::new().await;
    app.seed_parcel(1, "PCL00001", false).await;

    let response = app
        .request_raw("POST", "/api/parcels/create", "not json", None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/api/parcels/create",
            Some(json!({ "parcel": { "item": 5 } })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "Authentication is required to create parcels"
    );

    let response = app
        .request_raw("PUT", "/api/parcels/PCL00001", "", None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "PUT",
            "/api/parcels/PCL00001",
            Some(json!({ "sender_name": "x".repeat(300) })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "Authentication is required to update parcels"
    );
}

#[tokio::test]
async fn test_authenticated_malformed_body_is_bad_request() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(TELLER_ID);

    let response = app
        .request_raw("POST", "/api/parcels/create", "not json", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "fail");
}

#[tokio::test]
async fn test_protected_reads() {
    let mut config = helpers::test_config();
    config.auth.detail_requires_auth = true;
    config.auth.list_requires_auth = true;
    let app = helpers::TestApp::with_config(config).await;
    app.seed_parcel(1, "PCL00001", false).await;

    let response = app.request("GET", "/api/parcels/1", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "Authentication is required to detail parcels"
    );

    let response = app.request("GET", "/api/parcels/list", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let token = app.token_for(TELLER_ID);
    let response = app
        .request("GET", "/api/parcels/1", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/parcels/list", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}
