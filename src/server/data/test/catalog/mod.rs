use crate::server::data::catalog::CatalogRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_slug;
mod replace_links;
mod upsert;

type PlatformRepository<'a> =
    CatalogRepository<'a, entity::platform::Entity, sea_orm::DatabaseConnection>;
type GenreRepository<'a> = CatalogRepository<'a, entity::genre::Entity, sea_orm::DatabaseConnection>;
