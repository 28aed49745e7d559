use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Insert the sample catalog on startup.
    pub seed_database: bool,
    /// Single origin allowed by CORS. Any origin is allowed when unset.
    pub cors_allow_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: optional_var("PORT")?
                .map(|value| parse_port(&value))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),
            seed_database: optional_var("SEED_DATABASE")?
                .map(|value| parse_flag("SEED_DATABASE", &value))
                .transpose()?
                .unwrap_or(false),
            cors_allow_origin: optional_var("CORS_ALLOW_ORIGIN")?
                .map(|value| parse_origin(&value))
                .transpose()?,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads an optional variable, treating an empty value as unset.
fn optional_var(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: String::new(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "PORT".to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

fn parse_origin(value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value.trim()).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOW_ORIGIN".to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port(" 3000 ").unwrap(), 3000);
    }

    #[test]
    fn rejects_out_of_range_port() {
        let err = parse_port("70000").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidEnvVar { ref name, .. } if name == "PORT"));
    }

    #[test]
    fn parses_seed_flag() {
        assert!(parse_flag("SEED_DATABASE", "TRUE").unwrap());
        assert!(!parse_flag("SEED_DATABASE", "0").unwrap());
        assert!(parse_flag("SEED_DATABASE", "maybe").is_err());
    }

    #[test]
    fn rejects_origin_with_control_characters() {
        assert!(parse_origin("https://gamebit.example").is_ok());
        assert!(parse_origin("https://bad\norigin").is_err());
    }

    #[test]
    fn builds_bind_address() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".to_string(),
            port: 4000,
            seed_database: false,
            cors_allow_origin: None,
        };

        assert_eq!(config.bind_address(), "127.0.0.1:4000");
    }
}
