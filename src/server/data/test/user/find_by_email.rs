use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for a stored email, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("wayan@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("wayan@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
