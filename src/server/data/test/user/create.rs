use super::*;

/// Tests inserting a user.
///
/// Expected: Ok with matching timestamps
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Ayu".to_string(),
            email: "ayu@example.com".to_string(),
            region: "Indonesia".to_string(),
            avatar_url: None,
        })
        .await?;

    assert_eq!(user.email, "ayu@example.com");
    assert_eq!(user.created_at, user.updated_at);
    assert!(repo.get_by_id(user.id).await?.is_some());

    Ok(())
}

/// Tests inserting an email twice.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ayu@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            name: "Ayu".to_string(),
            email: "ayu@example.com".to_string(),
            region: "Indonesia".to_string(),
            avatar_url: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
