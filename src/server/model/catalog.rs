//! Catalog domain models: developers, publishers, platforms, genres and tags.
//!
//! The five kinds share one shape (`id`, unique `slug`, `name`) and are linked to
//! games through many-to-many join tables. `CatalogKind` names the kind carried by
//! a `/catalog/{kind}` route so a single service can dispatch to the right table.

use crate::{
    model::catalog::{CatalogEntryDto, CatalogSummaryDto, CreateCatalogEntryDto},
    server::util::slug::slugify,
};

/// The kinds of catalog entry a game can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Developer,
    Publisher,
    Platform,
    Genre,
    Tag,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 5] = [
        CatalogKind::Developer,
        CatalogKind::Publisher,
        CatalogKind::Platform,
        CatalogKind::Genre,
        CatalogKind::Tag,
    ];

    /// Resolves the plural path segment used in `/catalog/{kind}`.
    pub fn from_path(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.path() == segment)
    }

    /// Plural path segment, also the key of the relation array on a game.
    pub fn path(self) -> &'static str {
        match self {
            CatalogKind::Developer => "developers",
            CatalogKind::Publisher => "publishers",
            CatalogKind::Platform => "platforms",
            CatalogKind::Genre => "genres",
            CatalogKind::Tag => "tags",
        }
    }

    /// Singular display label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Developer => "Developer",
            CatalogKind::Publisher => "Publisher",
            CatalogKind::Platform => "Platform",
            CatalogKind::Genre => "Genre",
            CatalogKind::Tag => "Tag",
        }
    }

    pub fn not_found_message(self) -> String {
        format!("{} not found", self.label())
    }
}

/// A single catalog row, independent of its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: i32,
    pub slug: String,
    pub name: String,
}

impl CatalogEntry {
    /// Converts to the `{slug, name}` form embedded in game responses.
    pub fn into_summary_dto(self) -> CatalogSummaryDto {
        CatalogSummaryDto {
            slug: self.slug,
            name: self.name,
        }
    }
}

/// Catalog entry together with the slugs of the games linked to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntryWithGames {
    pub entry: CatalogEntry,
    /// Linked game slugs ordered by game name.
    pub games: Vec<String>,
}

impl CatalogEntryWithGames {
    pub fn into_dto(self) -> CatalogEntryDto {
        CatalogEntryDto {
            id: self.entry.id,
            slug: self.entry.slug,
            name: self.entry.name,
            games: self.games,
        }
    }
}

/// Parameters for creating a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCatalogEntryParams {
    pub slug: String,
    pub name: String,
}

impl CreateCatalogEntryParams {
    /// Builds parameters from a validated DTO, deriving the slug from the name
    /// when the client did not supply one.
    pub fn from_dto(dto: CreateCatalogEntryDto) -> Self {
        let slug = slugify(dto.slug.as_deref().unwrap_or(&dto.name));

        Self {
            slug,
            name: dto.name,
        }
    }
}
