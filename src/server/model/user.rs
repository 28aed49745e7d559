//! User domain models and parameters.
//!
//! Users are storefront accounts identified by a unique email address. They are
//! independent of the game catalog.

use chrono::{DateTime, Utc};

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// Storefront user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Display name of the user.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Free-form region the user shops from.
    pub region: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            region: entity.region,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            region: self.region,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    /// Stored trimmed and lowercased so uniqueness ignores case.
    pub email: String,
    pub region: String,
    pub avatar_url: Option<String>,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: normalize_email(&dto.email),
            region: dto.region,
            avatar_url: dto.avatar_url,
        }
    }
}

/// Parameters for a partial user update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
    pub avatar_url: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email.as_deref().map(normalize_email),
            region: dto.region,
            avatar_url: dto.avatar_url,
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_email_on_create_and_update() {
        let create = CreateUserParams::from_dto(CreateUserDto {
            name: "Budi".to_string(),
            email: " Budi@Example.COM ".to_string(),
            region: "Indonesia".to_string(),
            avatar_url: None,
        });
        let update = UpdateUserParams::from_dto(UpdateUserDto {
            email: Some("Sari@Example.com".to_string()),
            ..Default::default()
        });

        assert_eq!(create.email, "budi@example.com");
        assert_eq!(update.email.as_deref(), Some("sari@example.com"));
        assert_eq!(update.name, None);
    }
}
