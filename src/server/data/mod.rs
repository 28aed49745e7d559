//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations (CRUD) for each domain in the application.
//! They use SeaORM entity models internally and return domain models so the service
//! layer never sees entity types. Game and catalog repositories are generic over
//! `ConnectionTrait` so they can run inside a transaction.

pub mod catalog;
pub mod game;
pub mod user;

#[cfg(test)]
mod test;
