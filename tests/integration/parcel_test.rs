//! Integration tests for the parcel lifecycle endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{EDITOR_ID, RECEIVER_ID, SENDER_ID, TELLER_ID};

fn create_body() -> serde_json::Value {
    json!({
        "customer_id": SENDER_ID,
        "receiver_id": RECEIVER_ID.to_string(),
        "parcel": {
            "item": "Laptop",
            "dispatch_date": "2025-03-01",
            "arrival_date": "2025-03-04",
            "cost": "1500",
            "quantity": 1,
        }
    })
}

#[tokio::test]
async fn test_create_parcel() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(TELLER_ID);

    let response = app
        .request("POST", "/api/parcels/create", Some(create_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["message"], "Parcel saved successfully.");

    let parcel_no = response.body["parcel"]["parcel_no"].as_str().unwrap();
    assert!(parcel_no.starts_with("PCL"));
    let id = response.body["parcel"]["id"].as_i64().unwrap();

    let detail = app
        .request("GET", &format!("/api/parcels/{id}"), None, None)
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.body["item"], "Laptop");
    assert_eq!(detail.body["cost"], 1500);
    assert_eq!(detail.body["dispatch_date"], "2025-03-01");
    assert_eq!(detail.body["delivered"], false);
    assert_eq!(detail.body["status"], "in_transit");
    assert_eq!(detail.body["teller"]["id"], TELLER_ID);
}

#[tokio::test]
async fn test_create_parcel_rejects_bad_input() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(TELLER_ID);

    let mut body = create_body();
    body["parcel"]["quantity"] = json!(0);
    let response = app
        .request("POST", "/api/parcels/create", Some(body), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "fail");
    assert_eq!(
        response.body["message"],
        "quantity must be a positive integer"
    );

    let mut body = create_body();
    body["parcel"]["dispatch_date"] = json!("03/01/2025");
    let response = app
        .request("POST", "/api/parcels/create", Some(body), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "dispatch_date must be a date in YYYY-MM-DD format"
    );
}

#[tokio::test]
async fn test_create_parcel_unknown_sender() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(TELLER_ID);

    let mut body = create_body();
    body["customer_id"] = json!(404);
    let response = app
        .request("POST", "/api/parcels/create", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Sender 404 does not exist");
}

#[tokio::test]
async fn test_create_parcel_malformed_json() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(TELLER_ID);

    let response = app
        .request_raw("POST", "/api/parcels/create", "{\"customer_id\": ", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "fail");
}

#[tokio::test]
async fn test_list_parcels() {
    let app = helpers::TestApp::new().await;
    app.seed_parcel(1, "PCL00001", true).await;
    app.seed_parcel(2, "PCL00002", false).await;
    app.seed_parcel(3, "PCL00003", true).await;

    let response = app.request("GET", "/api/parcels/list", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<i64> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);

    let response = app
        .request("GET", "/api/parcels/list?category=received", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let parcels = response.body.as_array().unwrap();
    assert_eq!(parcels.len(), 2);
    assert!(parcels.iter().all(|p| p["delivered"] == true));
}

#[tokio::test]
async fn test_list_parcels_empty() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/parcels/list", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_get_parcel_detail() {
    let app = helpers::TestApp::new().await;
    app.seed_parcel(5, "PCL00005", true).await;

    let response = app.request("GET", "/api/parcels/5", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["parcel_no"], "PCL00005");
    assert_eq!(response.body["status"], "delivered");
    assert_eq!(response.body["sender"]["full_name"], "Sam Sender");
    assert_eq!(response.body["receiver"]["full_name"], "Rae Receiver");
    assert_eq!(response.body["teller"]["first_name"], "Tess");
}

#[tokio::test]
async fn test_get_parcel_bad_key_and_missing() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/parcels/abc", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/api/parcels/99", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Could not find parcel with id 99");
}

#[tokio::test]
async fn test_update_parcel() {
    let app = helpers::TestApp::new().await;
    app.seed_parcel(1, "PCL00001", false).await;
    let token = app.token_for(EDITOR_ID);

    let response = app
        .request(
            "PUT",
            "/api/parcels/PCL00001",
            Some(json!({
                "sender_name": "Samuel Sender",
                "receiver_phone": "0711111111",
                "parcel_quantity": "4",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["parcel_no"], "PCL00001");
    assert_eq!(response.body["sender_name"], "Samuel Sender");
    assert_eq!(response.body["sender_phone"], "0700000001");
    assert_eq!(response.body["receiver_phone"], "0711111111");
    assert_eq!(response.body["parcel_quantity"], 4);
    assert_eq!(response.body["booked_by"], "Ede Okafor");

    let detail = app.request("GET", "/api/parcels/1", None, None).await;
    assert_eq!(detail.body["teller"]["id"], EDITOR_ID);
    assert_eq!(detail.body["quantity"], 4);
}

#[tokio::test]
async fn test_update_missing_parcel() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(EDITOR_ID);

    let response = app
        .request(
            "PUT",
            "/api/parcels/PCL404",
            Some(json!({ "sender_name": "Nobody" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Could not find parcel PCL404");
}

#[tokio::test]
async fn test_update_rule_violation_names_field_only() {
    let app = helpers::TestApp::new().await;
    app.seed_parcel(1, "PCL00001", false).await;
    let token = app.token_for(EDITOR_ID);

    let response = app
        .request(
            "PUT",
            "/api/parcels/PCL00001",
            Some(json!({ "sender_name": "x".repeat(300) })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Invalid request body: sender_name must be at most 255 characters"
    );
}

#[tokio::test]
async fn test_delete_parcel() {
    let app = helpers::TestApp::new().await;
    app.seed_parcel(1, "PCL00001", false).await;
    let token = app.token_for(TELLER_ID);

    let response = app
        .request("DELETE", "/api/parcels/PCL00001", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["message"], "Parcel deleted successfully.");

    let response = app.request("GET", "/api/parcels/1", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", "/api/parcels/PCL00001", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "memory");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/shipments", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], "fail");
    assert_eq!(response.body["message"], "Route not found");
}

#[tokio::test]
async fn test_unsupported_method_uses_failure_shape() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/api/parcels/5", None, None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["status"], "fail");
    assert_eq!(response.body["message"], "Method not allowed");

    let response = app.request("DELETE", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["status"], "fail");
}
