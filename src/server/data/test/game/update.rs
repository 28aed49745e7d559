use super::*;

/// Tests a partial update of a game row.
///
/// Verifies that only present fields change and that the slug and timestamp passed
/// in are applied.
///
/// Expected: Ok with price and slug changed, description untouched
#[tokio::test]
async fn applies_present_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let updated_at = game.updated_at + Duration::seconds(5);
    let params = UpdateGameParams {
        price_cents: Some(99_900),
        ..Default::default()
    };

    let repo = GameRepository::new(db);
    let updated = repo
        .update(game.clone(), "renamed-game".to_string(), &params, updated_at)
        .await?;

    assert_eq!(updated.slug, "renamed-game");
    assert_eq!(updated.price_cents, 99_900);
    assert_eq!(updated.name, game.name);
    assert_eq!(updated.description, game.description);
    assert_eq!(updated.created_at, game.created_at);
    assert_eq!(updated.updated_at, updated_at);

    Ok(())
}
