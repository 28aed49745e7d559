use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        game::{CreateGameDto, GameDto, UpdateGameDto},
    },
    server::{
        error::AppError,
        extract::ValidatedJson,
        model::game::{CreateGameParams, Game, UpdateGameParams},
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

const GAME_NOT_FOUND: &str = "Game not found";

/// List every game.
///
/// Returns all games ordered by name, each with its developers, publishers,
/// platforms, genres, tags and images.
///
/// # Returns
/// - `200 OK` - Games ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let games = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(games.into_iter().map(Game::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a game by slug.
///
/// # Returns
/// - `200 OK` - The game with its relations
/// - `404 Not Found` - No game has the slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games/{slug}",
    tag = GAME_TAG,
    params(
        ("slug" = String, Path, description = "Game slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    match service.get_by_slug(&slug).await? {
        Some(game) => Ok((StatusCode::OK, Json(game.into_dto()))),
        None => Err(AppError::NotFound(GAME_NOT_FOUND.to_string())),
    }
}

/// Create a game.
///
/// Derives the slug from the name when none is supplied and connects the listed
/// catalog entries by slug.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Game fields, relation slugs and image URLs
///
/// # Returns
/// - `201 Created` - The created game
/// - `400 Bad Request` - Invalid body, duplicate slug or unknown relation slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Successfully created game", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let params = CreateGameParams::from_dto(payload)?;

    let game = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// Update a game.
///
/// Only the fields present in the body change. A changed name re-derives the slug
/// and a present relation array replaces that relation set.
///
/// # Returns
/// - `200 OK` - The updated game
/// - `400 Bad Request` - Invalid body, slug collision or unknown relation slug
/// - `404 Not Found` - No game has the slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/games/{slug}",
    tag = GAME_TAG,
    params(
        ("slug" = String, Path, description = "Current game slug")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Successfully updated game", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    apply_update(&state, &slug, payload).await
}

/// Update a game through the `/games/edit/{slug}` alias.
///
/// Behaves exactly like `PUT /games/{slug}`.
#[utoipa::path(
    put,
    path = "/games/edit/{slug}",
    tag = GAME_TAG,
    params(
        ("slug" = String, Path, description = "Current game slug")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Successfully updated game", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_game(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    apply_update(&state, &slug, payload).await
}

async fn apply_update(
    state: &AppState,
    slug: &str,
    payload: UpdateGameDto,
) -> Result<(StatusCode, Json<GameDto>), AppError> {
    let service = GameService::new(&state.db);

    let params = UpdateGameParams::from_dto(payload)?;

    match service.update(slug, params).await? {
        Some(game) => Ok((StatusCode::OK, Json(game.into_dto()))),
        None => Err(AppError::NotFound(GAME_NOT_FOUND.to_string())),
    }
}

/// Delete a game.
///
/// Removes the game together with its images and relation links.
///
/// # Returns
/// - `200 OK` - Game deleted
/// - `404 Not Found` - No game has the slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/games/{slug}",
    tag = GAME_TAG,
    params(
        ("slug" = String, Path, description = "Game slug")
    ),
    responses(
        (status = 200, description = "Successfully deleted game", body = MessageDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    if !service.delete(&slug).await? {
        return Err(AppError::NotFound(GAME_NOT_FOUND.to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Game successfully deleted")),
    ))
}
