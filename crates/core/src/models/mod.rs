//! Shared domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Genres offered by the catalog form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    /// Role-playing games.
    #[serde(rename = "RPG")]
    Rpg,
    /// Action games.
    #[serde(rename = "Acción")]
    Accion,
    /// Adventure games.
    Aventura,
    /// Strategy games.
    Estrategia,
    /// Sports games.
    Deportes,
}

impl Genre {
    /// Every genre, in the order the form presents them.
    pub const ALL: [Genre; 5] = [
        Genre::Rpg,
        Genre::Accion,
        Genre::Aventura,
        Genre::Estrategia,
        Genre::Deportes,
    ];

    /// User-facing label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Rpg => "RPG",
            Genre::Accion => "Acción",
            Genre::Aventura => "Aventura",
            Genre::Estrategia => "Estrategia",
            Genre::Deportes => "Deportes",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Platforms offered by the catalog form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// Desktop computers.
    #[serde(rename = "PC")]
    Pc,
    /// Sony PlayStation family.
    PlayStation,
    /// Microsoft Xbox family.
    Xbox,
    /// Nintendo Switch.
    #[serde(rename = "Nintendo Switch")]
    NintendoSwitch,
}

impl Platform {
    /// Every platform, in the order the form and the chart present them.
    pub const ALL: [Platform; 4] = [
        Platform::Pc,
        Platform::PlayStation,
        Platform::Xbox,
        Platform::NintendoSwitch,
    ];

    /// User-facing label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::PlayStation => "PlayStation",
            Platform::Xbox => "Xbox",
            Platform::NintendoSwitch => "Nintendo Switch",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores offered by the catalog form.
pub const SCORES: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// A saved catalog record.
///
/// Field order matches the export contract: id, title, genre, platform,
/// score, releaseYear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Positive, catalog-unique identifier.
    pub id: u32,
    /// Human-readable game title.
    pub title: String,
    /// Genre from the fixed enumeration.
    pub genre: Genre,
    /// Platform from the fixed enumeration.
    pub platform: Platform,
    /// Score between 1 and 10.
    pub score: u8,
    /// Four-digit release year.
    pub release_year: u16,
}

/// The form's working copy of a record.
///
/// Independent of the catalog list until saved; every field may be unset.
/// An unset id means "assign the next free id on save".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDraft {
    /// Identifier, unset for new records.
    pub id: Option<u32>,
    /// Title text as typed.
    pub title: String,
    /// Selected genre, if any.
    pub genre: Option<Genre>,
    /// Selected platform, if any.
    pub platform: Option<Platform>,
    /// Selected score, if any.
    pub score: Option<u8>,
    /// Release year, if entered.
    pub release_year: Option<u16>,
}

impl From<&Game> for GameDraft {
    fn from(game: &Game) -> Self {
        Self {
            id: Some(game.id),
            title: game.title.clone(),
            genre: Some(game.genre),
            platform: Some(game.platform),
            score: Some(game.score),
            release_year: Some(game.release_year),
        }
    }
}
