use super::*;

/// Tests inserting a game row.
///
/// Verifies that every column is written and both timestamps take the given instant.
///
/// Expected: Ok with the stored row
#[tokio::test]
async fn creates_game_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = GameRepository::new(db);
    let game = repo.create(&create_params("spider-man", "Spider Man"), now).await?;

    assert_eq!(game.slug, "spider-man");
    assert_eq!(game.price_cents, 85_000_000);
    assert_eq!(game.release_date, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    assert_eq!(game.created_at, now);
    assert_eq!(game.updated_at, now);

    Ok(())
}

/// Tests inserting two games with the same slug.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn fails_on_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    repo.create(&create_params("gta-v", "GTA V"), Utc::now()).await?;
    let result = repo.create(&create_params("gta-v", "GTA 5"), Utc::now()).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Game::find().count(db).await?, 1);

    Ok(())
}
