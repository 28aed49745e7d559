use axum::{response::Redirect, routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{catalog, game, index, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GameBit API",
        description = "Video game catalog with developers, publishers, platforms, genres, tags and users"
    ),
    tags(
        (name = "index", description = "Service metadata"),
        (name = "game", description = "Games and their relations"),
        (name = "catalog", description = "Developers, publishers, platforms, genres and tags"),
        (name = "user", description = "Storefront users")
    )
)]
struct ApiDoc;

/// Builds every API route plus the OpenAPI document and Swagger UI.
///
/// The OpenAPI document is served at `/openapi.json`, the UI at `/swagger`, and
/// `/docs` redirects to the UI.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(index::get_api_info))
        .routes(routes!(game::get_games, game::create_game))
        .routes(routes!(game::get_game, game::update_game, game::delete_game))
        .routes(routes!(game::edit_game))
        .routes(routes!(
            catalog::get_catalog_entries,
            catalog::create_catalog_entry
        ))
        .routes(routes!(
            catalog::get_catalog_entry,
            catalog::upsert_catalog_entry,
            catalog::delete_catalog_entry
        ))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger").url("/openapi.json", api))
        .route("/docs", get(|| async { Redirect::permanent("/swagger") }))
}
