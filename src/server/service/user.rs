//! User service for business logic.
//!
//! Enforces email uniqueness on top of the user repository.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by name.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user has the id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).get_by_id(id).await?)
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(email_taken());
        }

        let user = repo.create(params).await?;

        tracing::debug!("Created user {}", user.id);

        Ok(user)
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user has the id
    /// - `Err(AppError::BadRequest)` - New email belongs to another user
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(None);
        }

        if let Some(email) = &params.email {
            if let Some(owner) = repo.find_by_email(email).await? {
                if owner.id != id {
                    return Err(email_taken());
                }
            }
        }

        Ok(repo.update(id, params).await?)
    }

    /// Deletes a user; returns false if no user has the id.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).delete(id).await?)
    }
}

fn email_taken() -> AppError {
    AppError::BadRequest("Email already exists".to_string())
}
