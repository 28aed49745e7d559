use super::*;

/// Tests fetching an entry with its linked games.
///
/// Expected: Ok(Some) with game slugs ordered by game name
#[tokio::test]
async fn returns_entry_with_games_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let platform = factory::create_platform(db, "xbox-one", "Xbox One").await?;
    let last = factory::game::GameFactory::new(db)
        .name("The Last of Us")
        .slug("the-last-of-us")
        .build()
        .await?;
    let gta = factory::game::GameFactory::new(db)
        .name("GTA V")
        .slug("gta-v")
        .build()
        .await?;
    factory::link_platform(db, last.id, platform.id).await?;
    factory::link_platform(db, gta.id, platform.id).await?;

    let repo = PlatformRepository::new(db);
    let entry = repo.get_by_slug("xbox-one").await?.unwrap();

    assert_eq!(entry.entry.name, "Xbox One");
    assert_eq!(entry.games, vec!["gta-v", "the-last-of-us"]);

    Ok(())
}

/// Tests that entries of other kinds are not visible.
///
/// Expected: Ok(None) when the slug only exists as a genre
#[tokio::test]
async fn does_not_cross_kinds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_genre(db, "action", "Action").await?;

    let repo = PlatformRepository::new(db);

    assert!(repo.get_by_slug("action").await?.is_none());
    assert!(!repo.exists("action").await?);
    assert!(GenreRepository::new(db).exists("action").await?);

    Ok(())
}

/// Tests resolving several slugs at once.
///
/// Expected: only known slugs, in entry id order
#[tokio::test]
async fn find_by_slugs_skips_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_platform(db, "windows", "Windows").await?;
    factory::create_platform(db, "playstation-5", "PlayStation 5").await?;

    let repo = PlatformRepository::new(db);
    let entries = repo
        .find_by_slugs(&[
            "playstation-5".to_string(),
            "dreamcast".to_string(),
            "windows".to_string(),
        ])
        .await?;

    let slugs: Vec<&str> = entries.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["windows", "playstation-5"]);
    assert!(repo.find_by_slugs(&[]).await?.is_empty());

    Ok(())
}
