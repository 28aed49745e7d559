//! Game service: catalog reads and transactional writes.
//!
//! Creating or updating a game touches the game row, up to five join tables and the
//! image table. All of it runs in one transaction so an unknown relation slug leaves
//! nothing behind.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        catalog::{with_catalog_entity, CatalogEntity, CatalogRepository},
        game::GameRepository,
    },
    error::AppError,
    model::{
        catalog::CatalogKind,
        game::{CreateGameParams, Game, GameLinks, UpdateGameParams},
    },
    util::time::next_updated_at,
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every game with relations, ordered by name
    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        let games = GameRepository::new(self.db).get_all().await?;

        Ok(games.into_iter().map(Game::from_with_relations).collect())
    }

    /// Gets a game by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Game>, AppError> {
        let game = GameRepository::new(self.db).get_by_slug(slug).await?;

        Ok(game.map(Game::from_with_relations))
    }

    /// Creates a game with its relations and images.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game with relations loaded
    /// - `Err(AppError::BadRequest)` - Slug already taken or a relation slug is unknown
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, AppError> {
        let txn = self.db.begin().await?;
        let repo = GameRepository::new(&txn);

        if repo.find_by_slug(&params.slug).await?.is_some() {
            return Err(duplicate_slug(&params.slug));
        }

        let game = repo.create(&params, Utc::now()).await?;
        link_catalog_entries(&txn, game.id, &params.links).await?;
        repo.replace_images(game.id, &params.images).await?;

        let created = repo
            .get_by_slug(&game.slug)
            .await?
            .ok_or_else(|| AppError::InternalError("Game not found after creation".to_string()))?;

        txn.commit().await?;

        tracing::debug!("Created game {}", game.slug);

        Ok(Game::from_with_relations(created))
    }

    /// Applies a partial update to the game at `slug`.
    ///
    /// Present relation sets and the image list are replaced, and `updated_at` always
    /// moves forward.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The updated game
    /// - `Ok(None)` - No game has the slug
    /// - `Err(AppError::BadRequest)` - New slug collides or a relation slug is unknown
    pub async fn update(
        &self,
        slug: &str,
        params: UpdateGameParams,
    ) -> Result<Option<Game>, AppError> {
        let txn = self.db.begin().await?;
        let repo = GameRepository::new(&txn);

        let Some(current) = repo.find_by_slug(slug).await? else {
            return Ok(None);
        };

        let new_slug = params.resolve_slug(&current);
        if new_slug != current.slug && repo.find_by_slug(&new_slug).await?.is_some() {
            return Err(duplicate_slug(&new_slug));
        }

        let updated_at = next_updated_at(current.updated_at);
        let game = repo.update(current, new_slug, &params, updated_at).await?;

        link_catalog_entries(&txn, game.id, &params.links).await?;
        if let Some(images) = &params.images {
            repo.replace_images(game.id, images).await?;
        }

        let updated = repo
            .get_by_slug(&game.slug)
            .await?
            .ok_or_else(|| AppError::InternalError("Game not found after update".to_string()))?;

        txn.commit().await?;

        tracing::debug!("Updated game {} (was {})", game.slug, slug);

        Ok(Some(Game::from_with_relations(updated)))
    }

    /// Creates the game or fully overwrites the existing game with the same slug.
    ///
    /// Returns the game and whether it was newly created.
    pub async fn upsert(&self, params: CreateGameParams) -> Result<(Game, bool), AppError> {
        let exists = GameRepository::new(self.db)
            .find_by_slug(&params.slug)
            .await?
            .is_some();

        if !exists {
            return Ok((self.create(params).await?, true));
        }

        let slug = params.slug.clone();
        let game = self
            .update(&slug, params.into())
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Game {} vanished during upsert", slug)))?;

        Ok((game, false))
    }

    /// Deletes a game; returns false if no game has the slug
    pub async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        let deleted = GameRepository::new(self.db).delete(slug).await?;

        if deleted {
            tracing::debug!("Deleted game {}", slug);
        }

        Ok(deleted)
    }
}

fn duplicate_slug(slug: &str) -> AppError {
    AppError::BadRequest(format!("Game with slug '{}' already exists", slug))
}

/// Replaces every relation set present in `links`.
async fn link_catalog_entries<C: ConnectionTrait>(
    db: &C,
    game_id: i32,
    links: &GameLinks,
) -> Result<(), AppError> {
    for kind in CatalogKind::ALL {
        let Some(slugs) = links.get(kind) else {
            continue;
        };

        with_catalog_entity!(kind, E => relink::<E, C>(db, game_id, slugs).await?);
    }

    Ok(())
}

/// Resolves `slugs` to entries of one kind and makes them the game's full set.
///
/// # Returns
/// - `Ok(())` - Links replaced
/// - `Err(AppError::BadRequest)` - At least one slug does not exist; nothing was changed
async fn relink<E, C>(db: &C, game_id: i32, slugs: &[String]) -> Result<(), AppError>
where
    E: CatalogEntity,
    C: ConnectionTrait,
{
    let repo = CatalogRepository::<E, C>::new(db);
    let entries = repo.find_by_slugs(slugs).await?;

    let missing: Vec<&str> = slugs
        .iter()
        .filter(|slug| !entries.iter().any(|entry| &entry.slug == *slug))
        .map(String::as_str)
        .collect();

    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "{} not found: {}",
            E::KIND.label(),
            missing.join(", ")
        )));
    }

    let ids: Vec<i32> = entries.iter().map(|entry| entry.id).collect();
    repo.replace_links(game_id, &ids).await?;

    Ok(())
}
