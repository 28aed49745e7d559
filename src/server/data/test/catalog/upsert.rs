use super::*;

/// Tests upserting a new slug.
///
/// Expected: Ok with inserted = true
#[tokio::test]
async fn inserts_new_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenreRepository::new(db);
    let (entry, inserted) = repo.upsert("rpg".to_string(), "RPG".to_string()).await?;

    assert!(inserted);
    assert_eq!(entry.entry.slug, "rpg");
    assert_eq!(entry.entry.name, "RPG");
    assert!(entry.games.is_empty());

    Ok(())
}

/// Tests upserting an existing slug.
///
/// Verifies the row keeps its id and links while the name changes.
///
/// Expected: Ok with inserted = false and a single row
#[tokio::test]
async fn renames_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db, "rpg", "Role Playing").await?;
    let game = factory::create_game_with_slug(db, "spider-man").await?;
    factory::link_genre(db, game.id, genre.id).await?;

    let repo = GenreRepository::new(db);
    let (entry, inserted) = repo.upsert("rpg".to_string(), "RPG".to_string()).await?;

    assert!(!inserted);
    assert_eq!(entry.entry.id, genre.id);
    assert_eq!(entry.entry.name, "RPG");
    assert_eq!(entry.games, vec!["spider-man"]);
    assert_eq!(entity::prelude::Genre::find().count(db).await?, 1);

    Ok(())
}

/// Tests that create refuses an existing slug.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn create_fails_on_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenreRepository::new(db);
    repo.create("rpg".to_string(), "RPG".to_string()).await?;

    assert!(repo.create("rpg".to_string(), "Other".to_string()).await.is_err());

    Ok(())
}
