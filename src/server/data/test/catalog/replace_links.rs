use super::*;

/// Tests replacing a game's platform links.
///
/// Expected: only the new set remains linked
#[tokio::test]
async fn replaces_link_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let windows = factory::create_platform(db, "windows", "Windows").await?;
    let ps4 = factory::create_platform(db, "playstation-4", "PlayStation 4").await?;
    let ps5 = factory::create_platform(db, "playstation-5", "PlayStation 5").await?;
    factory::link_platform(db, game.id, windows.id).await?;

    let repo = PlatformRepository::new(db);
    repo.replace_links(game.id, &[ps5.id, ps4.id]).await?;

    let linked = repo.get_linked(&game).await?;
    let slugs: Vec<&str> = linked.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["playstation-4", "playstation-5"]);

    Ok(())
}

/// Tests clearing links of one kind.
///
/// Expected: platforms cleared, genre link on the same game kept
#[tokio::test]
async fn empty_set_clears_only_that_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, _) = factory::helpers::create_game_with_relations(db).await?;

    PlatformRepository::new(db).replace_links(game.id, &[]).await?;

    assert!(PlatformRepository::new(db).get_linked(&game).await?.is_empty());
    assert_eq!(GenreRepository::new(db).get_linked(&game).await?.len(), 1);

    Ok(())
}
