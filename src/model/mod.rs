//! Data transfer objects exchanged over the HTTP API.
//!
//! Request DTOs carry their field constraints as `validator` derives, so the same
//! rules apply to HTTP bodies and to the seed catalog. Response DTOs use camelCase
//! JSON keys and implement `ToSchema` for the generated OpenAPI document.

pub mod api;
pub mod catalog;
pub mod game;
pub mod user;
pub mod validate;
