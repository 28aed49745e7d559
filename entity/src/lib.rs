//! SeaORM entities for the game catalog schema.
//!
//! One module per table. Game relates many-to-many with the five catalog tables
//! (developer, publisher, platform, genre, tag) through `game_*` join tables whose
//! primary key is the `(game_id, <entry>_id)` pair.

pub mod prelude;

pub mod developer;
pub mod game;
pub mod game_developer;
pub mod game_genre;
pub mod game_platform;
pub mod game_publisher;
pub mod game_tag;
pub mod genre;
pub mod image;
pub mod platform;
pub mod publisher;
pub mod tag;
pub mod user;
