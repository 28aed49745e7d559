//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They enforce uniqueness rules, own transaction boundaries, and work with domain
//! models rather than DTOs or entity models.

pub mod catalog;
pub mod game;
pub mod user;
