//! Game factory for creating test game entities.
//!
//! This module provides factory methods for creating game and image entities with
//! sensible defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .name("GTA V")
///     .slug("gta-v")
///     .rating(4.5)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    name: String,
    price_cents: i64,
    description: Option<String>,
    release_date: NaiveDate,
    image_url: Option<String>,
    rating: f64,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"game-{id}"` where id is auto-incremented
    /// - name: `"Game {id}"`
    /// - price_cents: `10000`
    /// - release_date: `2021-01-01`
    /// - rating: `4.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("game-{}", id),
            name: format!("Game {}", id),
            price_cents: 10_000,
            description: Some("A test game".to_string()),
            release_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default(),
            image_url: None,
            rating: 4.0,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now();
        entity::game::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            name: ActiveValue::Set(self.name),
            price_cents: ActiveValue::Set(self.price_cents),
            description: ActiveValue::Set(self.description),
            release_date: ActiveValue::Set(self.release_date),
            image_url: ActiveValue::Set(self.image_url),
            rating: ActiveValue::Set(self.rating),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
///
/// Shorthand for `GameFactory::new(db).build().await`.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}

/// Creates a game with a specific slug.
///
/// Shorthand for `GameFactory::new(db).slug(slug).build().await`.
pub async fn create_game_with_slug(
    db: &DatabaseConnection,
    slug: impl Into<String>,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).slug(slug).build().await
}

/// Creates an image owned by the given game.
///
/// # Arguments
/// - `db` - Database connection
/// - `game_id` - Owning game ID
/// - `url` - Image URL
pub async fn create_image(
    db: &DatabaseConnection,
    game_id: i32,
    url: impl Into<String>,
) -> Result<entity::image::Model, DbErr> {
    entity::image::ActiveModel {
        url: ActiveValue::Set(url.into()),
        game_id: ActiveValue::Set(game_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
