//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use parcelhub_api::{AppState, build_router};
use parcelhub_auth::jwt::JwtEncoder;
use parcelhub_core::config::AppConfig;
use parcelhub_database::MemoryEntityStore;
use parcelhub_entity::parcel::Parcel;
use parcelhub_entity::party::Party;
use parcelhub_entity::user::{User, UserRole};

pub const SENDER_ID: i64 = 1;
pub const RECEIVER_ID: i64 = 2;
pub const TELLER_ID: i64 = 7;
pub const EDITOR_ID: i64 = 9;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router, for direct seeding and inspection
    pub store: MemoryEntityStore,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application with the default access policy.
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Create a test application from the given config, over a seeded
    /// memory store.
    pub async fn with_config(config: AppConfig) -> Self {
        let store = MemoryEntityStore::new();
        store.seed_sender(party(SENDER_ID, "Sam Sender")).await;
        store.seed_receiver(party(RECEIVER_ID, "Rae Receiver")).await;
        store.seed_user(user(TELLER_ID, "Tess", "Ng")).await;
        store.seed_user(user(EDITOR_ID, "Ede", "Okafor")).await;

        let state = AppState::new(config.clone(), Arc::new(store.clone()));
        let router = build_router(state);

        Self {
            router,
            store,
            config,
        }
    }

    /// Mint a bearer token for the given user.
    pub fn token_for(&self, user_id: i64) -> String {
        JwtEncoder::new(&self.config.auth)
            .issue(user_id, UserRole::Teller)
            .expect("Failed to issue token")
    }

    /// Insert a stored parcel directly.
    pub async fn seed_parcel(&self, id: i64, parcel_no: &str, delivered: bool) {
        self.store.seed_parcel(parcel(id, parcel_no, delivered)).await;
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body = body.map(|b| b.to_string());
        self.send(method, uri, body, token).await
    }

    /// Make a request with a raw (possibly malformed) JSON body
    pub async fn request_raw(
        &self,
        method: &str,
        uri: &str,
        body: &str,
        token: Option<&str>,
    ) -> TestResponse {
        self.send(method, uri, Some(body.to_string()), token).await
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Simplified test response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config
}

pub fn user(id: i64, first: &str, last: &str) -> User {
    User {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@parcelhub.test", first.to_lowercase()),
        role: UserRole::Teller,
        created_at: Utc::now(),
    }
}

pub fn party(id: i64, name: &str) -> Party {
    Party {
        id,
        full_name: name.to_string(),
        phone: Some(format!("07000000{id:02}")),
        email: None,
        center: Some("Central".to_string()),
    }
}

pub fn parcel(id: i64, parcel_no: &str, delivered: bool) -> Parcel {
    let now = Utc::now();
    Parcel {
        id,
        parcel_no: parcel_no.to_string(),
        item: "box".to_string(),
        sender_id: SENDER_ID,
        teller_id: TELLER_ID,
        receiver_id: RECEIVER_ID,
        dispatch_date: None,
        arrival_date: None,
        delivered_date: delivered.then(|| now.date_naive()),
        delivered,
        cost: 10,
        quantity: 2,
        sender_name: Some("Sam Sender".to_string()),
        sender_phone: Some("0700000001".to_string()),
        sender_address: Some("Central".to_string()),
        receiver_name: Some("Rae Receiver".to_string()),
        receiver_phone: Some("0700000002".to_string()),
        created_at: now,
        updated_at: now,
    }
}
