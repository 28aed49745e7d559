use super::*;

/// Tests replacing a game's gallery.
///
/// Expected: old images removed, new ones stored in the given order
#[tokio::test]
async fn replaces_existing_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::create_image(db, game.id, "https://example.com/old.jpg").await?;

    let repo = GameRepository::new(db);
    repo.replace_images(
        game.id,
        &[
            "https://example.com/b.jpg".to_string(),
            "https://example.com/a.jpg".to_string(),
        ],
    )
    .await?;

    let loaded = repo.get_by_slug(&game.slug).await?.unwrap();
    let urls: Vec<&str> = loaded.images.iter().map(|i| i.url.as_str()).collect();
    assert_eq!(urls, vec!["https://example.com/b.jpg", "https://example.com/a.jpg"]);

    Ok(())
}

/// Tests that replacing one game's images leaves another's alone.
///
/// Expected: the other game keeps its image
#[tokio::test]
async fn leaves_other_games_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game(db).await?;
    let second = factory::create_game(db).await?;
    factory::create_image(db, second.id, "https://example.com/keep.jpg").await?;

    let repo = GameRepository::new(db);
    repo.replace_images(first.id, &[]).await?;

    assert_eq!(entity::prelude::Image::find().count(db).await?, 1);

    Ok(())
}
