//! Game domain models and parameters.
//!
//! A game is the central catalog record. It carries its price in cents, a release
//! date, a rating between 0 and 5, its gallery images, and links to developers,
//! publishers, platforms, genres and tags.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::game::{CreateGameDto, GameDto, ImageDto, LocalizedDateDto, UpdateGameDto},
    server::{
        error::AppError,
        model::catalog::{CatalogEntry, CatalogKind},
        util::{
            format::{cents_to_price, localize_date, price_to_cents},
            parse::parse_release_date,
            slug::slugify,
        },
    },
};

/// Game row together with every relation needed to render it.
#[derive(Debug, Clone)]
pub struct GameWithRelations {
    pub game: entity::game::Model,
    pub developers: Vec<CatalogEntry>,
    pub publishers: Vec<CatalogEntry>,
    pub platforms: Vec<CatalogEntry>,
    pub genres: Vec<CatalogEntry>,
    pub tags: Vec<CatalogEntry>,
    pub images: Vec<entity::image::Model>,
}

/// Gallery image attached to a game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameImage {
    pub id: i32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub price_cents: i64,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub image_url: Option<String>,
    pub rating: f64,
    pub developers: Vec<CatalogEntry>,
    pub publishers: Vec<CatalogEntry>,
    pub platforms: Vec<CatalogEntry>,
    pub genres: Vec<CatalogEntry>,
    pub tags: Vec<CatalogEntry>,
    pub images: Vec<GameImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Converts a game row and its loaded relations into the domain model.
    pub fn from_with_relations(result: GameWithRelations) -> Self {
        let game = result.game;

        Self {
            id: game.id,
            slug: game.slug,
            name: game.name,
            price_cents: game.price_cents,
            description: game.description,
            release_date: game.release_date,
            image_url: game.image_url,
            rating: game.rating,
            developers: result.developers,
            publishers: result.publishers,
            platforms: result.platforms,
            genres: result.genres,
            tags: result.tags,
            images: result
                .images
                .into_iter()
                .map(|image| GameImage {
                    id: image.id,
                    url: image.url,
                })
                .collect(),
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    ///
    /// Price leaves as a JSON number and the release date is rendered for each
    /// supported locale.
    pub fn into_dto(self) -> GameDto {
        let localized = localize_date(self.release_date);

        GameDto {
            id: self.id,
            slug: self.slug,
            name: self.name,
            price: cents_to_price(self.price_cents),
            description: self.description,
            release_date: self.release_date,
            release_date_formatted: LocalizedDateDto {
                en_us: localized.en_us,
                id_id: localized.id_id,
            },
            image_url: self.image_url,
            rating: self.rating,
            developers: summaries(self.developers),
            publishers: summaries(self.publishers),
            platforms: summaries(self.platforms),
            genres: summaries(self.genres),
            tags: summaries(self.tags),
            images: self
                .images
                .into_iter()
                .map(|image| ImageDto {
                    id: image.id,
                    url: image.url,
                })
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn summaries(entries: Vec<CatalogEntry>) -> Vec<crate::model::catalog::CatalogSummaryDto> {
    entries
        .into_iter()
        .map(CatalogEntry::into_summary_dto)
        .collect()
}

/// Slugs of catalog entries to link, per kind.
///
/// `None` leaves that relation set untouched; `Some` replaces it with exactly
/// the listed entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameLinks {
    pub developers: Option<Vec<String>>,
    pub publishers: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl GameLinks {
    /// Slugs requested for `kind`, if that set is being replaced.
    pub fn get(&self, kind: CatalogKind) -> Option<&[String]> {
        match kind {
            CatalogKind::Developer => self.developers.as_deref(),
            CatalogKind::Publisher => self.publishers.as_deref(),
            CatalogKind::Platform => self.platforms.as_deref(),
            CatalogKind::Genre => self.genres.as_deref(),
            CatalogKind::Tag => self.tags.as_deref(),
        }
    }
}

/// Parameters for creating a game.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGameParams {
    pub slug: String,
    pub name: String,
    pub price_cents: i64,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub image_url: Option<String>,
    pub rating: f64,
    pub links: GameLinks,
    pub images: Vec<String>,
}

impl CreateGameParams {
    /// Builds parameters from a validated DTO.
    ///
    /// The slug is derived from the name unless one was supplied, in which case the
    /// supplied value is normalized with the same rules.
    ///
    /// # Returns
    /// - `Ok(CreateGameParams)` - Parameters ready for the service layer
    /// - `Err(AppError::Validation)` - Release date could not be parsed
    pub fn from_dto(dto: CreateGameDto) -> Result<Self, AppError> {
        let slug = slugify(dto.slug.as_deref().unwrap_or(&dto.name));
        let release_date = parse_date_field(&dto.release_date)?;

        Ok(Self {
            slug,
            name: dto.name,
            price_cents: price_to_cents(dto.price),
            description: dto.description,
            release_date,
            image_url: dto.image_url,
            rating: dto.rating,
            links: GameLinks {
                developers: Some(dto.developers),
                publishers: Some(dto.publishers),
                platforms: Some(dto.platforms),
                genres: Some(dto.genres),
                tags: Some(dto.tags),
            },
            images: dto.images,
        })
    }
}

/// Parameters for a partial game update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateGameParams {
    pub name: Option<String>,
    /// Normalized explicit slug; ignored when `name` changes.
    pub slug: Option<String>,
    pub price_cents: Option<i64>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
    pub links: GameLinks,
    pub images: Option<Vec<String>>,
}

impl UpdateGameParams {
    pub fn from_dto(dto: UpdateGameDto) -> Result<Self, AppError> {
        let release_date = dto
            .release_date
            .as_deref()
            .map(parse_date_field)
            .transpose()?;

        Ok(Self {
            name: dto.name,
            slug: dto.slug.as_deref().map(slugify),
            price_cents: dto.price.map(price_to_cents),
            description: dto.description,
            release_date,
            image_url: dto.image_url,
            rating: dto.rating,
            links: GameLinks {
                developers: dto.developers,
                publishers: dto.publishers,
                platforms: dto.platforms,
                genres: dto.genres,
                tags: dto.tags,
            },
            images: dto.images,
        })
    }

    /// Slug the game should carry after the update.
    ///
    /// A changed name re-derives the slug; otherwise an explicit slug is honoured and
    /// the current one kept when neither applies.
    pub fn resolve_slug(&self, current: &entity::game::Model) -> String {
        match &self.name {
            Some(name) if *name != current.name => slugify(name),
            _ => self
                .slug
                .clone()
                .unwrap_or_else(|| current.slug.clone()),
        }
    }
}

impl From<CreateGameParams> for UpdateGameParams {
    /// Full overwrite used when seeding re-applies a game that already exists.
    fn from(params: CreateGameParams) -> Self {
        Self {
            name: Some(params.name),
            slug: Some(params.slug),
            price_cents: Some(params.price_cents),
            description: params.description,
            release_date: Some(params.release_date),
            image_url: params.image_url,
            rating: Some(params.rating),
            links: params.links,
            images: Some(params.images),
        }
    }
}

fn parse_date_field(value: &str) -> Result<NaiveDate, AppError> {
    parse_release_date(value).ok_or_else(|| {
        AppError::Validation(format!(
            "Validation failed: releaseDate: '{}' is not a valid date",
            value
        ))
    })
}
