use super::*;

/// Tests deleting a user.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);
    assert!(repo.get_by_id(user.id).await?.is_none());

    Ok(())
}
