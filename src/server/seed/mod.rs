//! Idempotent sample data for development databases.
//!
//! Every row is a request DTO validated with the same rules as the HTTP layer, then
//! written with upsert-by-slug semantics so seeding twice leaves one copy of each row.

mod data;

use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::catalog::CreateCatalogEntryDto,
    server::{
        error::AppError,
        model::{
            catalog::{CatalogKind, CreateCatalogEntryParams},
            game::CreateGameParams,
        },
        service::{catalog::CatalogService, game::GameService},
    },
};

/// Counts of seeded rows, split into inserted and updated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub inserted: usize,
    pub updated: usize,
}

impl SeedSummary {
    fn record(&mut self, inserted: bool) {
        if inserted {
            self.inserted += 1;
        } else {
            self.updated += 1;
        }
    }
}

/// Seeds platforms, genres, tags, developers, publishers and then games.
///
/// Catalog entries come first so the games can connect to them by slug.
///
/// # Returns
/// - `Ok(SeedSummary)` - Every row was written
/// - `Err(AppError::Validation)` - A seed row violates the request rules
/// - `Err(AppError)` - Any database failure; rows written before it remain
pub async fn seed_database(db: &DatabaseConnection) -> Result<SeedSummary, AppError> {
    let mut summary = SeedSummary::default();

    tracing::info!("Seeding database");

    seed_catalog(db, CatalogKind::Platform, data::platforms(), &mut summary).await?;
    seed_catalog(db, CatalogKind::Genre, data::genres(), &mut summary).await?;
    seed_catalog(db, CatalogKind::Tag, data::tags(), &mut summary).await?;
    seed_catalog(db, CatalogKind::Developer, data::developers(), &mut summary).await?;
    seed_catalog(db, CatalogKind::Publisher, data::publishers(), &mut summary).await?;

    let games = GameService::new(db);
    for dto in data::games() {
        dto.validate()?;
        let params = CreateGameParams::from_dto(dto)?;

        let (game, inserted) = games.upsert(params).await?;
        summary.record(inserted);

        tracing::info!("Seeded game {}", game.name);
    }

    tracing::info!(
        "Seeding complete: {} inserted, {} updated",
        summary.inserted,
        summary.updated
    );

    Ok(summary)
}

async fn seed_catalog(
    db: &DatabaseConnection,
    kind: CatalogKind,
    rows: Vec<CreateCatalogEntryDto>,
    summary: &mut SeedSummary,
) -> Result<(), AppError> {
    let service = CatalogService::new(db);

    for dto in rows {
        dto.validate()?;
        let params = CreateCatalogEntryParams::from_dto(dto);

        let (entry, inserted) = service.upsert(kind, &params.slug, params.name).await?;
        summary.record(inserted);

        tracing::info!("Seeded {} {}", kind.label().to_lowercase(), entry.entry.name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::data;
    use crate::server::util::slug::is_slug;

    #[test]
    fn every_seed_row_passes_validation() {
        let catalog = [
            data::platforms(),
            data::genres(),
            data::tags(),
            data::developers(),
            data::publishers(),
        ];

        for rows in catalog {
            for dto in rows {
                assert!(dto.validate().is_ok(), "invalid seed row {:?}", dto);
                assert!(is_slug(dto.slug.as_deref().unwrap()), "bad slug {:?}", dto.slug);
            }
        }

        for dto in data::games() {
            assert!(dto.validate().is_ok(), "invalid seed game {:?}", dto.name);
        }
    }

    #[test]
    fn seed_sizes_match_catalog() {
        assert_eq!(data::platforms().len(), 8);
        assert_eq!(data::genres().len(), 8);
        assert_eq!(data::tags().len(), 8);
        assert_eq!(data::developers().len(), 3);
        assert_eq!(data::publishers().len(), 3);
        assert_eq!(data::games().len(), 3);
    }
}
