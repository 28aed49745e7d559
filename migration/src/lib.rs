pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_game_table;
mod m20250301_000002_create_developer_table;
mod m20250301_000003_create_publisher_table;
mod m20250301_000004_create_platform_table;
mod m20250301_000005_create_genre_table;
mod m20250301_000006_create_tag_table;
mod m20250301_000007_create_image_table;
mod m20250302_000008_create_game_relation_tables;
mod m20250310_000009_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_game_table::Migration),
            Box::new(m20250301_000002_create_developer_table::Migration),
            Box::new(m20250301_000003_create_publisher_table::Migration),
            Box::new(m20250301_000004_create_platform_table::Migration),
            Box::new(m20250301_000005_create_genre_table::Migration),
            Box::new(m20250301_000006_create_tag_table::Migration),
            Box::new(m20250301_000007_create_image_table::Migration),
            Box::new(m20250302_000008_create_game_relation_tables::Migration),
            Box::new(m20250310_000009_create_user_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::Database;

    #[tokio::test]
    async fn migrates_up_and_down() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in [
            "game",
            "developer",
            "publisher",
            "platform",
            "genre",
            "tag",
            "image",
            "game_developer",
            "game_publisher",
            "game_platform",
            "game_genre",
            "game_tag",
            "user",
        ] {
            assert!(manager.has_table(table).await?, "missing table {}", table);
        }

        Migrator::down(&db, None).await?;
        assert!(!manager.has_table("game_platform").await?);

        Ok(())
    }
}
