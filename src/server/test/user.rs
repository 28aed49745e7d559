use serde_json::json;

use super::*;

fn user_body(email: &str) -> Value {
    json!({
        "name": "Budi Santoso",
        "email": email,
        "region": "Indonesia",
        "avatarUrl": "https://example.com/budi.png"
    })
}

/// Tests registering a user.
///
/// Expected: 201 with camelCase fields and matching timestamps
#[tokio::test]
async fn creates_user() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(db, Method::POST, "/users", Some(user_body("budi@example.com"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "budi@example.com");
    assert_eq!(body["avatarUrl"], "https://example.com/budi.png");
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

/// Tests registering an email twice, differing only in case.
///
/// Expected: 400 Email already exists
#[tokio::test]
async fn rejects_duplicate_email() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    send(db, Method::POST, "/users", Some(user_body("budi@example.com"))).await;

    let (status, body) = send(db, Method::POST, "/users", Some(user_body("BUDI@example.com"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists");
}

/// Tests validation of the user body.
///
/// Expected: 400 mentioning the email field
#[tokio::test]
async fn rejects_invalid_email() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(db, Method::POST, "/users", Some(user_body("not-an-email"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("email"));
}

/// Tests a partial update.
///
/// Expected: only the region changes and `updatedAt` moves forward
#[tokio::test]
async fn updates_user_partially() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let (_, created) = send(db, Method::POST, "/users", Some(user_body("budi@example.com"))).await;
    let uri = format!("/users/{}", created["id"]);

    let (status, updated) = send(db, Method::PUT, &uri, Some(json!({"region": "Singapore"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["region"], "Singapore");
    assert_eq!(updated["name"], "Budi Santoso");

    let before: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(created["updatedAt"].clone()).unwrap();
    let after: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(updated["updatedAt"].clone()).unwrap();
    assert!(after > before);
}

/// Tests moving a user onto another user's email.
///
/// Expected: 400 Email already exists; keeping one's own email is fine
#[tokio::test]
async fn update_rejects_email_of_other_user() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let (_, budi) = send(db, Method::POST, "/users", Some(user_body("budi@example.com"))).await;
    send(db, Method::POST, "/users", Some(user_body("sari@example.com"))).await;
    let uri = format!("/users/{}", budi["id"]);

    let (status, body) = send(db, Method::PUT, &uri, Some(json!({"email": "sari@example.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists");

    let (status, _) = send(db, Method::PUT, &uri, Some(json!({"email": "budi@example.com"}))).await;
    assert_eq!(status, StatusCode::OK);
}

/// Tests the user lifecycle ending in delete.
///
/// Expected: 200 confirmation, then 404 User not found on get and delete
#[tokio::test]
async fn delete_then_get_is_not_found() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = test_utils::factory::create_user(db).await.unwrap();
    let uri = format!("/users/{}", user.id);

    let (status, body) = send(db, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User successfully deleted");

    let (status, body) = send(db, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, _) = send(db, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests that users are listed by name.
///
/// Expected: alphabetical order
#[tokio::test]
async fn lists_users_ordered_by_name() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    test_utils::factory::user::UserFactory::new(db).name("Wayan").build().await.unwrap();
    test_utils::factory::user::UserFactory::new(db).name("Ayu").build().await.unwrap();

    let (status, body) = send(db, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Ayu");
    assert_eq!(body[1]["name"], "Wayan");
}

/// Tests a non-numeric user id on every id route.
///
/// Expected: 400 with a JSON message
#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(db, Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = send(db, Method::PUT, "/users/abc", Some(json!({"region": "Bali"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = send(db, Method::DELETE, "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

/// Tests updating a missing user with an email another user owns.
///
/// Expected: 404 User not found rather than an email conflict
#[tokio::test]
async fn update_of_missing_user_is_not_found_before_email_check() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    send(db, Method::POST, "/users", Some(user_body("sari@example.com"))).await;

    let (status, body) = send(
        db,
        Method::PUT,
        "/users/9999",
        Some(json!({"email": "sari@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}
