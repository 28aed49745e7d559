//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM active
//! models, bypassing the application's services.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let game = factory::create_game(&db).await?;
//!     let platform = factory::create_platform(&db, "windows", "Windows").await?;
//!
//!     // Link them through the join table
//!     factory::link_platform(&db, game.id, platform.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db)
//!     .name("Spider Man")
//!     .slug("spider-man")
//!     .price_cents(85_000_000)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `game` - Create game entities and images
//! - `catalog` - Create developer/publisher/platform/genre/tag entities and link them to games
//! - `user` - Create user entities
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod game;
pub mod helpers;
pub mod catalog;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use game::{create_game, create_game_with_slug, create_image};
pub use catalog::{
    create_developer, create_genre, create_platform, create_publisher, create_tag,
    link_developer, link_genre, link_platform, link_publisher, link_tag,
};
pub use user::create_user;
