pub use super::developer::Entity as Developer;
pub use super::game::Entity as Game;
pub use super::game_developer::Entity as GameDeveloper;
pub use super::game_genre::Entity as GameGenre;
pub use super::game_platform::Entity as GamePlatform;
pub use super::game_publisher::Entity as GamePublisher;
pub use super::game_tag::Entity as GameTag;
pub use super::genre::Entity as Genre;
pub use super::image::Entity as Image;
pub use super::platform::Entity as Platform;
pub use super::publisher::Entity as Publisher;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
