use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub region: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub region: String,
    #[validate(url)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub region: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_email_and_avatar() {
        let dto = CreateUserDto {
            name: "Budi".to_string(),
            email: "budi-at-example".to_string(),
            region: "Indonesia".to_string(),
            avatar_url: Some("avatar.png".to_string()),
        };

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("avatar_url"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn deserializes_camel_case_body() {
        let dto: CreateUserDto = serde_json::from_value(serde_json::json!({
            "name": "Budi",
            "email": "budi@example.com",
            "region": "Indonesia",
            "avatarUrl": "https://example.com/budi.png"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.avatar_url.as_deref(), Some("https://example.com/budi.png"));
    }
}
