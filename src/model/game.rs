use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{
    catalog::CatalogSummaryDto,
    validate::{validate_image_urls, validate_release_date, validate_sluggable},
};

/// Upper bound on prices, well inside the range where cents fit in an `i64`.
pub const MAX_PRICE: f64 = 1_000_000_000_000.0;

/// Writes whole prices as JSON integers, so a stored `850000` goes out as `850000`.
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() <= MAX_PRICE {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageDto {
    pub id: i32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocalizedDateDto {
    #[serde(rename = "enUS")]
    pub en_us: String,
    #[serde(rename = "idID")]
    pub id_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub release_date_formatted: LocalizedDateDto,
    pub image_url: Option<String>,
    pub rating: f64,
    pub developers: Vec<CatalogSummaryDto>,
    pub publishers: Vec<CatalogSummaryDto>,
    pub platforms: Vec<CatalogSummaryDto>,
    pub genres: Vec<CatalogSummaryDto>,
    pub tags: Vec<CatalogSummaryDto>,
    pub images: Vec<ImageDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /games`.
///
/// Relation arrays list slugs of existing catalog entries to connect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameDto {
    #[validate(length(min = 1, max = 100), custom(function = "validate_sluggable"))]
    pub name: String,
    #[validate(length(min = 1, max = 100), custom(function = "validate_sluggable"))]
    pub slug: Option<String>,
    #[validate(range(min = 0.0, max = MAX_PRICE))]
    pub price: f64,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 datetime.
    #[validate(custom(function = "validate_release_date"))]
    pub release_date: String,
    #[validate(url)]
    pub image_url: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_image_urls"))]
    pub images: Vec<String>,
}

/// Body of `PUT /games/{slug}`.
///
/// Absent fields are left untouched. A present relation array replaces that
/// relation set, so `[]` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameDto {
    #[validate(length(min = 1, max = 100), custom(function = "validate_sluggable"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100), custom(function = "validate_sluggable"))]
    pub slug: Option<String>,
    #[validate(range(min = 0.0, max = MAX_PRICE))]
    pub price: Option<f64>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_release_date"))]
    pub release_date: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    pub developers: Option<Vec<String>>,
    pub publishers: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    #[validate(custom(function = "validate_image_urls"))]
    pub images: Option<Vec<String>>,
}
