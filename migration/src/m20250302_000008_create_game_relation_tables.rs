use sea_orm_migration::{
    prelude::*,
    schema::*,
    sea_orm::sea_query::{IntoIden, TableCreateStatement},
};

use super::{
    m20250301_000001_create_game_table::Game,
    m20250301_000002_create_developer_table::Developer,
    m20250301_000003_create_publisher_table::Publisher,
    m20250301_000004_create_platform_table::Platform,
    m20250301_000005_create_genre_table::Genre,
    m20250301_000006_create_tag_table::Tag,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Builds a `game_<entry>` join table keyed by the `(game_id, <entry>_id)` pair.
///
/// Both foreign keys cascade so deleting either side removes the link.
fn join_table<J, R>(
    name: &str,
    join: J,
    game_col: J,
    ref_col: J,
    entry: R,
    entry_id: R,
) -> TableCreateStatement
where
    J: IntoIden + Copy + 'static,
    R: IntoIden + 'static,
{
    Table::create()
        .table(join)
        .if_not_exists()
        .col(integer(game_col))
        .col(integer(ref_col))
        .primary_key(Index::create().col(game_col).col(ref_col))
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{}_game_id", name))
                .from(join, game_col)
                .to(Game::Table, Game::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{}_entry_id", name))
                .from(join, ref_col)
                .to(entry, entry_id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let tables = [
            join_table(
                "game_developer",
                GameDeveloper::Table,
                GameDeveloper::GameId,
                GameDeveloper::DeveloperId,
                Developer::Table,
                Developer::Id,
            ),
            join_table(
                "game_publisher",
                GamePublisher::Table,
                GamePublisher::GameId,
                GamePublisher::PublisherId,
                Publisher::Table,
                Publisher::Id,
            ),
            join_table(
                "game_platform",
                GamePlatform::Table,
                GamePlatform::GameId,
                GamePlatform::PlatformId,
                Platform::Table,
                Platform::Id,
            ),
            join_table(
                "game_genre",
                GameGenre::Table,
                GameGenre::GameId,
                GameGenre::GenreId,
                Genre::Table,
                Genre::Id,
            ),
            join_table(
                "game_tag",
                GameTag::Table,
                GameTag::GameId,
                GameTag::TagId,
                Tag::Table,
                Tag::Id,
            ),
        ];

        for table in tables {
            manager.create_table(table).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GameGenre::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GamePlatform::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GamePublisher::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GameDeveloper::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub enum GameDeveloper {
    Table,
    GameId,
    DeveloperId,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum GamePublisher {
    Table,
    GameId,
    PublisherId,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum GamePlatform {
    Table,
    GameId,
    PlatformId,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum GameGenre {
    Table,
    GameId,
    GenreId,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum GameTag {
    Table,
    GameId,
    TagId,
}
