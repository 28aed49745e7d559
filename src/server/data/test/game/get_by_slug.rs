use super::*;

/// Tests loading a game with every relation.
///
/// Expected: Ok(Some) with one entry per catalog kind
#[tokio::test]
async fn loads_game_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, platform) = factory::helpers::create_game_with_relations(db).await?;
    factory::create_image(db, game.id, "https://example.com/cover.jpg").await?;

    let repo = GameRepository::new(db);
    let loaded = repo.get_by_slug(&game.slug).await?.unwrap();

    assert_eq!(loaded.game.id, game.id);
    assert_eq!(loaded.developers.len(), 1);
    assert_eq!(loaded.publishers.len(), 1);
    assert_eq!(loaded.genres.len(), 1);
    assert_eq!(loaded.tags.len(), 1);
    assert_eq!(loaded.platforms[0].slug, platform.slug);
    assert_eq!(loaded.images[0].url, "https://example.com/cover.jpg");

    Ok(())
}

/// Tests that linked entries come back in catalog insertion order.
///
/// Links are written in a different order than the entries were created.
///
/// Expected: platforms ordered by entry id
#[tokio::test]
async fn orders_relations_by_entry_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let windows = factory::create_platform(db, "windows", "Windows").await?;
    let ps5 = factory::create_platform(db, "playstation-5", "PlayStation 5").await?;
    let xbox = factory::create_platform(db, "xbox-one", "Xbox One").await?;
    factory::link_platform(db, game.id, xbox.id).await?;
    factory::link_platform(db, game.id, windows.id).await?;
    factory::link_platform(db, game.id, ps5.id).await?;

    let repo = GameRepository::new(db);
    let loaded = repo.get_by_slug(&game.slug).await?.unwrap();

    let slugs: Vec<&str> = loaded.platforms.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["windows", "playstation-5", "xbox-one"]);

    Ok(())
}

/// Tests looking up a slug nobody has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert!(repo.get_by_slug("missing").await?.is_none());
    assert!(repo.find_by_slug("missing").await?.is_none());

    Ok(())
}

/// Tests listing games.
///
/// Expected: ordered by name regardless of insertion order
#[tokio::test]
async fn get_all_orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db).name("Zelda").build().await?;
    factory::game::GameFactory::new(db).name("Celeste").build().await?;

    let repo = GameRepository::new(db);
    let games = repo.get_all().await?;

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].game.name, "Celeste");
    assert_eq!(games[1].game.name, "Zelda");

    Ok(())
}
