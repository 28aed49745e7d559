use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        catalog::{CatalogEntryDto, CreateCatalogEntryDto, UpsertCatalogEntryDto},
    },
    server::{
        error::AppError,
        extract::ValidatedJson,
        model::catalog::{CatalogEntryWithGames, CatalogKind, CreateCatalogEntryParams},
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

fn resolve_kind(kind: &str) -> Result<CatalogKind, AppError> {
    CatalogKind::from_path(kind)
        .ok_or_else(|| AppError::NotFound(format!("Unknown catalog '{}'", kind)))
}

/// List the catalog entries of one kind.
///
/// # Arguments
/// - `kind` - One of `developers`, `publishers`, `platforms`, `genres`, `tags`
///
/// # Returns
/// - `200 OK` - Entries ordered by name, each with its linked game slugs
/// - `404 Not Found` - Unknown kind
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/catalog/{kind}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "developers, publishers, platforms, genres or tags")
    ),
    responses(
        (status = 200, description = "Successfully retrieved catalog entries", body = Vec<CatalogEntryDto>),
        (status = 404, description = "Unknown catalog kind", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catalog_entries(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind = resolve_kind(&kind)?;
    let service = CatalogService::new(&state.db);

    let entries = service.get_all(kind).await?;

    Ok((
        StatusCode::OK,
        Json(
            entries
                .into_iter()
                .map(CatalogEntryWithGames::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a catalog entry by slug.
///
/// # Returns
/// - `200 OK` - The entry with its linked game slugs
/// - `404 Not Found` - Unknown kind or no entry has the slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/catalog/{kind}/{slug}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "developers, publishers, platforms, genres or tags"),
        ("slug" = String, Path, description = "Entry slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved catalog entry", body = CatalogEntryDto),
        (status = 404, description = "Catalog entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catalog_entry(
    State(state): State<AppState>,
    Path((kind, slug)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = resolve_kind(&kind)?;
    let service = CatalogService::new(&state.db);

    match service.get_by_slug(kind, &slug).await? {
        Some(entry) => Ok((StatusCode::OK, Json(entry.into_dto()))),
        None => Err(AppError::NotFound(kind.not_found_message())),
    }
}

/// Create a catalog entry.
///
/// The slug is derived from the name when absent.
///
/// # Returns
/// - `201 Created` - The created entry
/// - `400 Bad Request` - Invalid body or duplicate slug
/// - `404 Not Found` - Unknown kind
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/catalog/{kind}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "developers, publishers, platforms, genres or tags")
    ),
    request_body = CreateCatalogEntryDto,
    responses(
        (status = 201, description = "Successfully created catalog entry", body = CatalogEntryDto),
        (status = 400, description = "Invalid catalog entry data", body = ErrorDto),
        (status = 404, description = "Unknown catalog kind", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_catalog_entry(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateCatalogEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let kind = resolve_kind(&kind)?;
    let service = CatalogService::new(&state.db);

    let params = CreateCatalogEntryParams::from_dto(payload);

    let entry = service.create(kind, params).await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Insert or rename the catalog entry at a slug.
///
/// # Returns
/// - `201 Created` - A new entry was inserted
/// - `200 OK` - The existing entry was renamed
/// - `400 Bad Request` - Invalid body or non-canonical slug
/// - `404 Not Found` - Unknown kind
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/catalog/{kind}/{slug}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "developers, publishers, platforms, genres or tags"),
        ("slug" = String, Path, description = "Entry slug")
    ),
    request_body = UpsertCatalogEntryDto,
    responses(
        (status = 200, description = "Successfully updated catalog entry", body = CatalogEntryDto),
        (status = 201, description = "Successfully created catalog entry", body = CatalogEntryDto),
        (status = 400, description = "Invalid catalog entry data", body = ErrorDto),
        (status = 404, description = "Unknown catalog kind", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_catalog_entry(
    State(state): State<AppState>,
    Path((kind, slug)): Path<(String, String)>,
    ValidatedJson(payload): ValidatedJson<UpsertCatalogEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let kind = resolve_kind(&kind)?;
    let service = CatalogService::new(&state.db);

    let (entry, inserted) = service.upsert(kind, &slug, payload.name).await?;

    let status = if inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(entry.into_dto())))
}

/// Delete a catalog entry.
///
/// Links to games are removed with it; the games themselves stay.
///
/// # Returns
/// - `200 OK` - Entry deleted
/// - `404 Not Found` - Unknown kind or no entry has the slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/catalog/{kind}/{slug}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "developers, publishers, platforms, genres or tags"),
        ("slug" = String, Path, description = "Entry slug")
    ),
    responses(
        (status = 200, description = "Successfully deleted catalog entry", body = MessageDto),
        (status = 404, description = "Catalog entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_catalog_entry(
    State(state): State<AppState>,
    Path((kind, slug)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = resolve_kind(&kind)?;
    let service = CatalogService::new(&state.db);

    if !service.delete(kind, &slug).await? {
        return Err(AppError::NotFound(kind.not_found_message()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("{} successfully deleted", kind.label()))),
    ))
}
