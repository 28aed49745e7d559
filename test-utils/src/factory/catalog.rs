//! Catalog entry factories.
//!
//! Developers, publishers, platforms, genres and tags share the same `{id, slug, name}`
//! shape. This module creates them and links them to games through the `game_*` join
//! tables.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Generates a `create_*` / `link_*` pair for one catalog kind.
macro_rules! catalog_factory {
    ($create:ident, $link:ident, $entry:ident, $join:ident, $entry_id:ident, $label:literal) => {
        #[doc = concat!("Creates a ", $label, " with the given slug and name.")]
        pub async fn $create(
            db: &DatabaseConnection,
            slug: &str,
            name: &str,
        ) -> Result<entity::$entry::Model, DbErr> {
            entity::$entry::ActiveModel {
                slug: ActiveValue::Set(slug.to_string()),
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await
        }

        #[doc = concat!("Links a ", $label, " to a game through the `", stringify!($join), "` join table.")]
        pub async fn $link(db: &DatabaseConnection, game_id: i32, $entry_id: i32) -> Result<(), DbErr> {
            entity::$join::ActiveModel {
                game_id: ActiveValue::Set(game_id),
                $entry_id: ActiveValue::Set($entry_id),
            }
            .insert(db)
            .await?;
            Ok(())
        }
    };
}

catalog_factory!(create_developer, link_developer, developer, game_developer, developer_id, "developer");
catalog_factory!(create_publisher, link_publisher, publisher, game_publisher, publisher_id, "publisher");
catalog_factory!(create_platform, link_platform, platform, game_platform, platform_id, "platform");
catalog_factory!(create_genre, link_genre, genre, game_genre, genre_id, "genre");
catalog_factory!(create_tag, link_tag, tag, game_tag, tag_id, "tag");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};
    use sea_orm::{EntityTrait, ModelTrait};

    #[tokio::test]
    async fn links_platform_to_game() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let game = factory::create_game(db).await?;
        let platform = create_platform(db, "windows", "Windows").await?;
        link_platform(db, game.id, platform.id).await?;

        let platforms = game.find_related(entity::prelude::Platform).all(db).await?;
        assert_eq!(platforms.len(), 1);
        assert_eq!(platforms[0].slug, "windows");

        let links = entity::prelude::GamePlatform::find().all(db).await?;
        assert_eq!(links.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn creates_and_links_every_kind() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let game = factory::create_game(db).await?;
        let developer = create_developer(db, "naughty-dog", "Naughty Dog").await?;
        let publisher = create_publisher(db, "sony", "Sony").await?;
        let genre = create_genre(db, "action", "Action").await?;
        let tag = create_tag(db, "co-op", "Co-op").await?;
        link_developer(db, game.id, developer.id).await?;
        link_publisher(db, game.id, publisher.id).await?;
        link_genre(db, game.id, genre.id).await?;
        link_tag(db, game.id, tag.id).await?;

        assert_eq!(entity::prelude::GameDeveloper::find().all(db).await?.len(), 1);
        assert_eq!(entity::prelude::GamePublisher::find().all(db).await?.len(), 1);
        assert_eq!(entity::prelude::GameGenre::find().all(db).await?.len(), 1);
        let tags = game.find_related(entity::prelude::Tag).all(db).await?;
        assert_eq!(tags[0].slug, "co-op");

        Ok(())
    }
}
