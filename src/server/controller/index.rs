use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::ApiInfoDto;

/// Tag for grouping service metadata endpoints in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

/// Routes advertised by `GET /`.
const ENDPOINTS: &[&str] = &[
    "GET /games",
    "POST /games",
    "GET /games/{slug}",
    "PUT /games/{slug}",
    "PUT /games/edit/{slug}",
    "DELETE /games/{slug}",
    "GET /catalog/{kind}",
    "POST /catalog/{kind}",
    "GET /catalog/{kind}/{slug}",
    "PUT /catalog/{kind}/{slug}",
    "DELETE /catalog/{kind}/{slug}",
    "GET /users",
    "POST /users",
    "GET /users/{id}",
    "PUT /users/{id}",
    "DELETE /users/{id}",
    "GET /openapi.json",
    "GET /swagger",
];

/// Service name, version and route overview.
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Service metadata", body = ApiInfoDto)
    ),
)]
pub async fn get_api_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiInfoDto {
            message: "GameBit API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: ENDPOINTS.iter().map(|route| route.to_string()).collect(),
        }),
    )
}
