use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validate::validate_sluggable;

/// A catalog entry as embedded in a game: developer, publisher, platform, genre or tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogSummaryDto {
    pub slug: String,
    pub name: String,
}

/// A catalog entry with the slugs of every game linked to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntryDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub games: Vec<String>,
}

/// Body of `POST /catalog/{kind}`. The slug is derived from the name when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCatalogEntryDto {
    #[validate(length(min = 1, max = 100), custom(function = "validate_sluggable"))]
    pub name: String,
    #[validate(length(min = 1, max = 100), custom(function = "validate_sluggable"))]
    pub slug: Option<String>,
}

/// Body of `PUT /catalog/{kind}/{slug}`; the slug comes from the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertCatalogEntryDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
