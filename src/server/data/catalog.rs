//! Repository for the five catalog entry tables.
//!
//! Developers, publishers, platforms, genres and tags share one table shape and one
//! join-table shape, so a single repository generic over [`CatalogEntity`] serves all
//! of them. Repositories take any [`ConnectionTrait`] so game writes can resolve and
//! link entries inside the caller's transaction.

use std::marker::PhantomData;

use sea_orm::{
    sea_query::OnConflict,
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Related,
};

use crate::server::model::catalog::{CatalogEntry, CatalogEntryWithGames, CatalogKind};

/// A catalog entry table and the join table linking it to games.
pub trait CatalogEntity: EntityTrait + Related<entity::game::Entity> {
    /// Join table between `game` and this entity.
    type Link: EntityTrait;

    const KIND: CatalogKind;

    fn id_column() -> Self::Column;
    fn slug_column() -> Self::Column;
    fn name_column() -> Self::Column;
    /// `game_id` column of the join table.
    fn link_game_column() -> <Self::Link as EntityTrait>::Column;

    fn into_entry(model: Self::Model) -> CatalogEntry;
    fn new_entry(slug: String, name: String) -> Self::ActiveModel;
    fn new_link(game_id: i32, entry_id: i32) -> <Self::Link as EntityTrait>::ActiveModel;
}

macro_rules! catalog_entity {
    ($kind:expr, $entity:ident, $link:ident, $link_column:ident) => {
        impl CatalogEntity for entity::$entity::Entity {
            type Link = entity::$link::Entity;

            const KIND: CatalogKind = $kind;

            fn id_column() -> Self::Column {
                entity::$entity::Column::Id
            }

            fn slug_column() -> Self::Column {
                entity::$entity::Column::Slug
            }

            fn name_column() -> Self::Column {
                entity::$entity::Column::Name
            }

            fn link_game_column() -> entity::$link::Column {
                entity::$link::Column::GameId
            }

            fn into_entry(model: entity::$entity::Model) -> CatalogEntry {
                CatalogEntry {
                    id: model.id,
                    slug: model.slug,
                    name: model.name,
                }
            }

            fn new_entry(slug: String, name: String) -> entity::$entity::ActiveModel {
                entity::$entity::ActiveModel {
                    slug: ActiveValue::Set(slug),
                    name: ActiveValue::Set(name),
                    ..Default::default()
                }
            }

            fn new_link(game_id: i32, entry_id: i32) -> entity::$link::ActiveModel {
                entity::$link::ActiveModel {
                    game_id: ActiveValue::Set(game_id),
                    $link_column: ActiveValue::Set(entry_id),
                }
            }
        }
    };
}

catalog_entity!(CatalogKind::Developer, developer, game_developer, developer_id);
catalog_entity!(CatalogKind::Publisher, publisher, game_publisher, publisher_id);
catalog_entity!(CatalogKind::Platform, platform, game_platform, platform_id);
catalog_entity!(CatalogKind::Genre, genre, game_genre, genre_id);
catalog_entity!(CatalogKind::Tag, tag, game_tag, tag_id);

/// Evaluates `$body` with `$entity` bound as a type alias to the entity table of `$kind`.
///
/// Lets code that only knows a [`CatalogKind`] at runtime call generic
/// [`CatalogRepository`] methods.
macro_rules! with_catalog_entity {
    ($kind:expr, $entity:ident => $body:expr) => {
        match $kind {
            $crate::server::model::catalog::CatalogKind::Developer => {
                type $entity = entity::developer::Entity;
                $body
            }
            $crate::server::model::catalog::CatalogKind::Publisher => {
                type $entity = entity::publisher::Entity;
                $body
            }
            $crate::server::model::catalog::CatalogKind::Platform => {
                type $entity = entity::platform::Entity;
                $body
            }
            $crate::server::model::catalog::CatalogKind::Genre => {
                type $entity = entity::genre::Entity;
                $body
            }
            $crate::server::model::catalog::CatalogKind::Tag => {
                type $entity = entity::tag::Entity;
                $body
            }
        }
    };
}

pub(crate) use with_catalog_entity;

pub struct CatalogRepository<'a, E, C> {
    db: &'a C,
    _entity: PhantomData<E>,
}

impl<'a, E, C> CatalogRepository<'a, E, C>
where
    E: CatalogEntity,
    C: ConnectionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Gets every entry of this kind with its linked games, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<CatalogEntryWithGames>, DbErr> {
        let models = E::find()
            .order_by_asc(E::name_column())
            .order_by_asc(E::id_column())
            .all(self.db)
            .await?;

        let mut entries = Vec::with_capacity(models.len());
        for model in models {
            entries.push(self.with_games(model).await?);
        }

        Ok(entries)
    }

    /// Gets an entry by slug with its linked games.
    ///
    /// # Returns
    /// - `Ok(Some(CatalogEntryWithGames))` - Entry found
    /// - `Ok(None)` - No entry of this kind has the slug
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<CatalogEntryWithGames>, DbErr> {
        let Some(model) = E::find()
            .filter(E::slug_column().eq(slug))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.with_games(model).await?))
    }

    /// Returns true if an entry with the slug exists.
    pub async fn exists(&self, slug: &str) -> Result<bool, DbErr> {
        let model = E::find()
            .filter(E::slug_column().eq(slug))
            .one(self.db)
            .await?;

        Ok(model.is_some())
    }

    /// Finds the entries matching any of `slugs`. Unknown slugs are skipped.
    pub async fn find_by_slugs(&self, slugs: &[String]) -> Result<Vec<CatalogEntry>, DbErr> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let models = E::find()
            .filter(E::slug_column().is_in(slugs.iter().cloned()))
            .order_by_asc(E::id_column())
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(E::into_entry).collect())
    }

    /// Inserts a new entry. Fails on a duplicate slug.
    pub async fn create(&self, slug: String, name: String) -> Result<CatalogEntryWithGames, DbErr> {
        E::insert(E::new_entry(slug.clone(), name))
            .exec_without_returning(self.db)
            .await?;

        self.get_by_slug(&slug).await?.ok_or(DbErr::RecordNotFound(format!(
            "{} with slug {} not found after creation",
            E::KIND.label(),
            slug
        )))
    }

    /// Inserts the entry or, when the slug already exists, renames it.
    ///
    /// # Returns
    /// - `Ok((entry, true))` - A new row was inserted
    /// - `Ok((entry, false))` - An existing row was updated
    /// - `Err(DbErr)` - Database error
    pub async fn upsert(
        &self,
        slug: String,
        name: String,
    ) -> Result<(CatalogEntryWithGames, bool), DbErr> {
        let inserted = !self.exists(&slug).await?;

        E::insert(E::new_entry(slug.clone(), name))
            .on_conflict(
                OnConflict::column(E::slug_column())
                    .update_column(E::name_column())
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        let entry = self.get_by_slug(&slug).await?.ok_or(DbErr::RecordNotFound(format!(
            "{} with slug {} not found after upsert",
            E::KIND.label(),
            slug
        )))?;

        Ok((entry, inserted))
    }

    /// Deletes the entry with the given slug. Join rows go with it by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry deleted
    /// - `Ok(false)` - No entry has the slug
    pub async fn delete(&self, slug: &str) -> Result<bool, DbErr> {
        let result = E::delete_many()
            .filter(E::slug_column().eq(slug))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the set of entries of this kind linked to a game.
    pub async fn replace_links(&self, game_id: i32, entry_ids: &[i32]) -> Result<(), DbErr> {
        <E::Link as EntityTrait>::delete_many()
            .filter(E::link_game_column().eq(game_id))
            .exec(self.db)
            .await?;

        for entry_id in entry_ids {
            <E::Link as EntityTrait>::insert(E::new_link(game_id, *entry_id))
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Gets the entries of this kind linked to a game, in link order by entry id.
    pub async fn get_linked(&self, game: &entity::game::Model) -> Result<Vec<CatalogEntry>, DbErr>
    where
        entity::game::Entity: Related<E>,
    {
        let models = game
            .find_related(E::default())
            .order_by_asc(E::id_column())
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(E::into_entry).collect())
    }

    async fn with_games(&self, model: E::Model) -> Result<CatalogEntryWithGames, DbErr> {
        let games = model
            .find_related(entity::game::Entity)
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;

        Ok(CatalogEntryWithGames {
            entry: E::into_entry(model),
            games: games.into_iter().map(|game| game.slug).collect(),
        })
    }
}
