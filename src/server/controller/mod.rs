//! HTTP request handlers.
//!
//! Controllers extract path parameters and validated bodies, convert DTOs into
//! parameter types, call a service, and turn the domain result back into a DTO.

pub mod catalog;
pub mod game;
pub mod index;
pub mod user;
