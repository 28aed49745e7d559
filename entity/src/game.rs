use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    /// Price in minor currency units (hundredths).
    pub price_cents: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub release_date: Date,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::image::Entity")]
    Image,
    #[sea_orm(has_many = "super::game_developer::Entity")]
    GameDeveloper,
    #[sea_orm(has_many = "super::game_publisher::Entity")]
    GamePublisher,
    #[sea_orm(has_many = "super::game_platform::Entity")]
    GamePlatform,
    #[sea_orm(has_many = "super::game_genre::Entity")]
    GameGenre,
    #[sea_orm(has_many = "super::game_tag::Entity")]
    GameTag,
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl Related<super::developer::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_developer::Relation::Developer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_developer::Relation::Game.def().rev())
    }
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_publisher::Relation::Publisher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_publisher::Relation::Game.def().rev())
    }
}

impl Related<super::platform::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_platform::Relation::Platform.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_platform::Relation::Game.def().rev())
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_genre::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_genre::Relation::Game.def().rev())
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_tag::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
