//! End-to-end tests driving the router with in-memory SQLite.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router, seed, state::AppState};

mod user;

/// Test database with every application table created.
async fn setup() -> TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}

fn app(db: &DatabaseConnection) -> Router {
    router::router().with_state(AppState::new(db.clone()))
}

/// Test database with the sample catalog seeded.
async fn seeded_setup() -> TestContext {
    let test = setup().await;
    seed::seed_database(test.db.as_ref().unwrap()).await.unwrap();
    test
}

/// Sends a request and returns the status with the parsed JSON body.
///
/// Bodies that are not JSON come back as `Value::Null`.
async fn send(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app(db).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (
        status,
        serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    )
}
