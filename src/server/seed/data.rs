//! Sample catalog inserted by the seeder.

use crate::model::{catalog::CreateCatalogEntryDto, game::CreateGameDto};

fn entries(rows: &[(&str, &str)]) -> Vec<CreateCatalogEntryDto> {
    rows.iter()
        .map(|(slug, name)| CreateCatalogEntryDto {
            name: name.to_string(),
            slug: Some(slug.to_string()),
        })
        .collect()
}

fn slugs(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn platforms() -> Vec<CreateCatalogEntryDto> {
    entries(&[
        ("windows", "Windows"),
        ("macos", "macOS"),
        ("linux-ubuntu", "Linux Ubuntu"),
        ("playstation-4", "PlayStation 4"),
        ("playstation-5", "PlayStation 5"),
        ("xbox-series-x", "Xbox Series X"),
        ("nintendo-switch", "Nintendo Switch"),
        ("xbox-one", "Xbox One"),
    ])
}

pub fn genres() -> Vec<CreateCatalogEntryDto> {
    entries(&[
        ("action", "Action"),
        ("adventure", "Adventure"),
        ("rpg", "RPG"),
        ("strategy", "Strategy"),
        ("simulation", "Simulation"),
        ("sports", "Sports"),
        ("racing", "Racing"),
        ("puzzle", "Puzzle"),
    ])
}

pub fn tags() -> Vec<CreateCatalogEntryDto> {
    entries(&[
        ("single-player", "Single Player"),
        ("multiplayer", "Multiplayer"),
        ("open-world", "Open World"),
        ("story-rich", "Story Rich"),
        ("first-person", "First Person"),
        ("third-person", "Third Person"),
        ("co-op", "Co-op"),
        ("competitive", "Competitive"),
    ])
}

pub fn developers() -> Vec<CreateCatalogEntryDto> {
    entries(&[
        ("insomniac-games", "Insomniac Games"),
        ("rockstar-games", "Rockstar Games"),
        ("naughty-dog", "Naughty Dog"),
    ])
}

pub fn publishers() -> Vec<CreateCatalogEntryDto> {
    entries(&[
        ("sony-interactive-entertainment", "Sony Interactive Entertainment"),
        ("rockstar-games", "Rockstar Games"),
        ("naughty-dog", "Naughty Dog"),
    ])
}

pub fn games() -> Vec<CreateGameDto> {
    vec![
        CreateGameDto {
            name: "Spider Man".to_string(),
            slug: Some("spider-man".to_string()),
            price: 850000.0,
            description: Some(
                "Spider-Man is an action-adventure game that allows players to explore New York \
                 City as Peter Parker, also known as Spider-Man. With smooth web-swinging \
                 mechanics and dynamic combat, players will face various notorious villains from \
                 the Marvel Universe while saving the city from major threats."
                    .to_string(),
            ),
            release_date: "2021-01-01".to_string(),
            image_url: Some("https://example.com/game1.jpg".to_string()),
            rating: 4.5,
            developers: slugs(&["insomniac-games"]),
            publishers: slugs(&["sony-interactive-entertainment"]),
            platforms: slugs(&["windows", "playstation-5", "xbox-one"]),
            genres: slugs(&["action", "adventure", "rpg"]),
            tags: slugs(&["single-player", "multiplayer"]),
            images: slugs(&["https://example.com/game1.jpg"]),
        },
        CreateGameDto {
            name: "GTA V".to_string(),
            slug: Some("gta-v".to_string()),
            price: 400000.0,
            description: Some(
                "Grand Theft Auto V is an action-adventure game that allows players to explore \
                 the open world of Los Santos and Blaine County. With a focus on crime and \
                 driving, players can engage in various activities such as heists, races, and \
                 street battles while interacting with other characters and completing missions."
                    .to_string(),
            ),
            release_date: "2021-01-02".to_string(),
            image_url: Some("https://example.com/game2.jpg".to_string()),
            rating: 4.5,
            developers: slugs(&["rockstar-games"]),
            publishers: slugs(&["rockstar-games"]),
            platforms: slugs(&["playstation-4", "xbox-one"]),
            genres: slugs(&["action", "adventure", "rpg"]),
            tags: slugs(&["single-player", "multiplayer"]),
            images: slugs(&["https://example.com/game2.jpg"]),
        },
        CreateGameDto {
            name: "The Last of Us".to_string(),
            slug: Some("the-last-of-us".to_string()),
            price: 900000.0,
            description: Some(
                "The Last of Us is an action-adventure game that follows the journey of Joel and \
                 Ellie as they navigate through a post-apocalyptic world filled with dangerous \
                 creatures and other survivors. With a focus on survival and storytelling, \
                 players will encounter various challenges and make difficult decisions while \
                 trying to protect Ellie from the harsh realities of the world."
                    .to_string(),
            ),
            release_date: "2021-01-03".to_string(),
            image_url: Some("https://example.com/game3.jpg".to_string()),
            rating: 4.5,
            developers: slugs(&["naughty-dog"]),
            publishers: slugs(&["sony-interactive-entertainment"]),
            platforms: slugs(&["playstation-4", "xbox-one", "playstation-5"]),
            genres: slugs(&["action", "adventure", "rpg"]),
            tags: slugs(&["single-player", "multiplayer"]),
            images: slugs(&["https://example.com/game3.jpg"]),
        },
    ]
}
