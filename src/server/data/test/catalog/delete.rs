use super::*;

/// Tests deleting a linked entry.
///
/// Expected: Ok(true), join rows removed, game kept
#[tokio::test]
async fn deletes_entry_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, platform) = factory::helpers::create_game_with_relations(db).await?;

    let repo = PlatformRepository::new(db);
    assert!(repo.delete(&platform.slug).await?);

    assert_eq!(entity::prelude::GamePlatform::find().count(db).await?, 0);
    assert!(entity::prelude::Game::find_by_id(game.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a slug that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PlatformRepository::new(db).delete("missing").await?);

    Ok(())
}
