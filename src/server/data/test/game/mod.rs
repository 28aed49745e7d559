use crate::server::{
    data::game::GameRepository,
    model::game::{CreateGameParams, GameLinks, UpdateGameParams},
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_slug;
mod replace_images;
mod update;

fn create_params(slug: &str, name: &str) -> CreateGameParams {
    CreateGameParams {
        slug: slug.to_string(),
        name: name.to_string(),
        price_cents: 85_000_000,
        description: Some("Web-slinging".to_string()),
        release_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        image_url: None,
        rating: 4.5,
        links: GameLinks::default(),
        images: Vec::new(),
    }
}
