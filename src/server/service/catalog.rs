//! Catalog service for developers, publishers, platforms, genres and tags.
//!
//! Every operation takes the [`CatalogKind`] resolved from the route and dispatches
//! to the matching entity table.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::catalog::{with_catalog_entity, CatalogRepository},
    error::AppError,
    model::catalog::{CatalogEntryWithGames, CatalogKind, CreateCatalogEntryParams},
    util::slug::is_slug,
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every entry of a kind, ordered by name
    pub async fn get_all(&self, kind: CatalogKind) -> Result<Vec<CatalogEntryWithGames>, AppError> {
        let entries = with_catalog_entity!(kind, E => {
            CatalogRepository::<E, _>::new(self.db).get_all().await?
        });

        Ok(entries)
    }

    /// Gets a single entry by slug
    pub async fn get_by_slug(
        &self,
        kind: CatalogKind,
        slug: &str,
    ) -> Result<Option<CatalogEntryWithGames>, AppError> {
        let entry = with_catalog_entity!(kind, E => {
            CatalogRepository::<E, _>::new(self.db).get_by_slug(slug).await?
        });

        Ok(entry)
    }

    /// Creates a new entry, rejecting a slug that is already taken
    pub async fn create(
        &self,
        kind: CatalogKind,
        params: CreateCatalogEntryParams,
    ) -> Result<CatalogEntryWithGames, AppError> {
        let entry = with_catalog_entity!(kind, E => {
            let repo = CatalogRepository::<E, _>::new(self.db);

            if repo.exists(&params.slug).await? {
                return Err(AppError::BadRequest(format!(
                    "{} with slug '{}' already exists",
                    kind.label(),
                    params.slug
                )));
            }

            repo.create(params.slug, params.name).await?
        });

        tracing::debug!("Created {} {}", kind.label(), entry.entry.slug);

        Ok(entry)
    }

    /// Inserts or renames the entry at `slug`
    ///
    /// Returns the entry and whether a new row was inserted.
    pub async fn upsert(
        &self,
        kind: CatalogKind,
        slug: &str,
        name: String,
    ) -> Result<(CatalogEntryWithGames, bool), AppError> {
        if !is_slug(slug) {
            return Err(AppError::Validation(format!(
                "Validation failed: slug: '{}' is not a valid slug",
                slug
            )));
        }

        let result = with_catalog_entity!(kind, E => {
            CatalogRepository::<E, _>::new(self.db)
                .upsert(slug.to_string(), name)
                .await?
        });

        Ok(result)
    }

    /// Deletes an entry; returns false if no entry has the slug
    pub async fn delete(&self, kind: CatalogKind, slug: &str) -> Result<bool, AppError> {
        let deleted = with_catalog_entity!(kind, E => {
            CatalogRepository::<E, _>::new(self.db).delete(slug).await?
        });

        Ok(deleted)
    }
}
