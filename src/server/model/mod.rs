//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated,
//! normalized input from controllers into the service layer.

pub mod catalog;
pub mod game;
pub mod user;
