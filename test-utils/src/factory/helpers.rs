//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique id generation and convenience methods for creating a game
//! together with its related rows.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game linked to one row of every catalog kind.
///
/// This is a convenience method that creates:
/// 1. Game
/// 2. Developer, Publisher, Platform, Genre and Tag
/// 3. One join row per catalog kind linking it to the game
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((game, platform))` - The created game and its platform
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_relations(
    db: &DatabaseConnection,
) -> Result<(entity::game::Model, entity::platform::Model), DbErr> {
    let id = next_id();
    let game = crate::factory::game::create_game(db).await?;

    let developer =
        crate::factory::catalog::create_developer(db, &format!("dev-{}", id), "Developer").await?;
    let publisher =
        crate::factory::catalog::create_publisher(db, &format!("pub-{}", id), "Publisher").await?;
    let platform =
        crate::factory::catalog::create_platform(db, &format!("platform-{}", id), "Platform")
            .await?;
    let genre = crate::factory::catalog::create_genre(db, &format!("genre-{}", id), "Genre").await?;
    let tag = crate::factory::catalog::create_tag(db, &format!("tag-{}", id), "Tag").await?;

    crate::factory::catalog::link_developer(db, game.id, developer.id).await?;
    crate::factory::catalog::link_publisher(db, game.id, publisher.id).await?;
    crate::factory::catalog::link_platform(db, game.id, platform.id).await?;
    crate::factory::catalog::link_genre(db, game.id, genre.id).await?;
    crate::factory::catalog::link_tag(db, game.id, tag.id).await?;

    Ok((game, platform))
}
