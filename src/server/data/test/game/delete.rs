use super::*;

/// Tests deleting a game with relations.
///
/// Verifies that images and join rows are removed while catalog entries remain.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_game_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, _) = factory::helpers::create_game_with_relations(db).await?;
    factory::create_image(db, game.id, "https://example.com/a.jpg").await?;

    let repo = GameRepository::new(db);
    assert!(repo.delete(&game.slug).await?);

    assert_eq!(entity::prelude::Game::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Image::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GamePlatform::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Platform::find().count(db).await?, 1);

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

    let repo = GameRepository::new(db);

    assert!(!repo.delete("missing").await?);

    Ok(())
}
