use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::catalog::CatalogRepository,
    model::game::{CreateGameParams, GameWithRelations, UpdateGameParams},
};

pub struct GameRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every game with its relations, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<GameWithRelations>, DbErr> {
        let games = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Name)
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        let mut results = Vec::with_capacity(games.len());
        for game in games {
            results.push(self.load_relations(game).await?);
        }

        Ok(results)
    }

    /// Gets a game by slug with its relations.
    ///
    /// # Returns
    /// - `Ok(Some(GameWithRelations))` - Game found
    /// - `Ok(None)` - No game has the slug
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<GameWithRelations>, DbErr> {
        match self.find_by_slug(slug).await? {
            Some(game) => Ok(Some(self.load_relations(game).await?)),
            None => Ok(None),
        }
    }

    /// Finds the bare game row by slug, without relations.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Inserts the game row. Relations and images are written separately.
    pub async fn create(
        &self,
        params: &CreateGameParams,
        now: DateTime<Utc>,
    ) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            slug: ActiveValue::Set(params.slug.clone()),
            name: ActiveValue::Set(params.name.clone()),
            price_cents: ActiveValue::Set(params.price_cents),
            description: ActiveValue::Set(params.description.clone()),
            release_date: ActiveValue::Set(params.release_date),
            image_url: ActiveValue::Set(params.image_url.clone()),
            rating: ActiveValue::Set(params.rating),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies the present fields of `params` to an existing game row.
    ///
    /// # Arguments
    /// - `game` - The current row
    /// - `slug` - Slug the game carries after the update
    /// - `params` - Fields to change; `None` leaves a column untouched
    /// - `updated_at` - New modification timestamp
    pub async fn update(
        &self,
        game: entity::game::Model,
        slug: String,
        params: &UpdateGameParams,
        updated_at: DateTime<Utc>,
    ) -> Result<entity::game::Model, DbErr> {
        let mut active: entity::game::ActiveModel = game.into();

        active.slug = ActiveValue::Set(slug);
        if let Some(name) = &params.name {
            active.name = ActiveValue::Set(name.clone());
        }
        if let Some(price_cents) = params.price_cents {
            active.price_cents = ActiveValue::Set(price_cents);
        }
        if let Some(description) = &params.description {
            active.description = ActiveValue::Set(Some(description.clone()));
        }
        if let Some(release_date) = params.release_date {
            active.release_date = ActiveValue::Set(release_date);
        }
        if let Some(image_url) = &params.image_url {
            active.image_url = ActiveValue::Set(Some(image_url.clone()));
        }
        if let Some(rating) = params.rating {
            active.rating = ActiveValue::Set(rating);
        }
        active.updated_at = ActiveValue::Set(updated_at);

        active.update(self.db).await
    }

    /// Deletes a game by slug. Images and join rows go with it by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Game deleted
    /// - `Ok(false)` - No game has the slug
    pub async fn delete(&self, slug: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_many()
            .filter(entity::game::Column::Slug.eq(slug))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the gallery images of a game, keeping the given order.
    pub async fn replace_images(&self, game_id: i32, urls: &[String]) -> Result<(), DbErr> {
        entity::prelude::Image::delete_many()
            .filter(entity::image::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        for url in urls {
            entity::image::ActiveModel {
                url: ActiveValue::Set(url.clone()),
                game_id: ActiveValue::Set(game_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Loads every relation of a game row.
    async fn load_relations(&self, game: entity::game::Model) -> Result<GameWithRelations, DbErr> {
        let developers = CatalogRepository::<entity::developer::Entity, C>::new(self.db)
            .get_linked(&game)
            .await?;
        let publishers = CatalogRepository::<entity::publisher::Entity, C>::new(self.db)
            .get_linked(&game)
            .await?;
        let platforms = CatalogRepository::<entity::platform::Entity, C>::new(self.db)
            .get_linked(&game)
            .await?;
        let genres = CatalogRepository::<entity::genre::Entity, C>::new(self.db)
            .get_linked(&game)
            .await?;
        let tags = CatalogRepository::<entity::tag::Entity, C>::new(self.db)
            .get_linked(&game)
            .await?;
        let images = game
            .find_related(entity::prelude::Image)
            .order_by_asc(entity::image::Column::Id)
            .all(self.db)
            .await?;

        Ok(GameWithRelations {
            game,
            developers,
            publishers,
            platforms,
            genres,
            tags,
            images,
        })
    }
}
