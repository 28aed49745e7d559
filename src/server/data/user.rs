//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing storefront accounts. Entity
//! models are converted to the `User` domain model at this boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::user::{CreateUserParams, UpdateUserParams, User},
    util::time::next_updated_at,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Gets a user by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    /// Finds the user owning an email address.
    ///
    /// # Arguments
    /// - `email` - Normalized (lowercase) email address
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user owns the address
    /// - `Ok(None)` - The address is free
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Inserts a new user with both timestamps set to now.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            region: ActiveValue::Set(params.region),
            avatar_url: ActiveValue::Set(params.avatar_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    /// Applies a partial update and advances `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user has the id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let updated_at = next_updated_at(user.updated_at);
        let mut active: entity::user::ActiveModel = user.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(region) = params.region {
            active.region = ActiveValue::Set(region);
        }
        if let Some(avatar_url) = params.avatar_url {
            active.avatar_url = ActiveValue::Set(Some(avatar_url));
        }
        active.updated_at = ActiveValue::Set(updated_at);

        let user = active.update(self.db).await?;

        Ok(Some(User::from_entity(user)))
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user has the id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
