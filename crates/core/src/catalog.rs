//! In-memory catalog state and its mutation rules.
//!
//! The store owns the authoritative record list, the active search term,
//! the current selection, and the form draft. All mutations happen
//! synchronously on the caller's thread; a revision counter identifies the
//! record list's mutation generation so view collaborators (the platform
//! chart) can rebuild exactly when the list changed.

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Game, GameDraft, Genre, Platform};

/// Validation failure blocking an attempted mutation.
///
/// Display strings are the user-facing alert texts. Violations abort only
/// the attempted operation and leave prior state untouched; they are never
/// logged or retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// A required form field is empty.
    #[error("Todos los campos son requeridos")]
    MissingField,
    /// The entered id is not a positive integer.
    #[error("El ID debe ser un número positivo")]
    InvalidId,
    /// The release year is not a four-digit number.
    #[error("El año de lanzamiento debe ser un número de 4 dígitos")]
    InvalidReleaseYear,
    /// A new record would reuse an existing id.
    #[error("Ya existe un juego con ese ID")]
    DuplicateId,
    /// Delete was requested without a selected record.
    #[error("Por favor, selecciona un juego para eliminar")]
    NoSelection,
}

/// Result of a successful [`CatalogStore::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new record was appended with the given id.
    Created(u32),
    /// The record with the given id was replaced in place.
    Updated(u32),
}

impl SaveOutcome {
    /// Id of the record the save touched.
    pub fn id(&self) -> u32 {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => *id,
        }
    }
}

/// Draft contents that passed validation. The id stays optional: an unset
/// id is assigned during the save itself.
struct ValidDraft {
    id: Option<u32>,
    title: String,
    genre: Genre,
    platform: Platform,
    score: u8,
    release_year: u16,
}

impl ValidDraft {
    fn into_game(self, id: u32) -> Game {
        Game {
            id,
            title: self.title,
            genre: self.genre,
            platform: self.platform,
            score: self.score,
            release_year: self.release_year,
        }
    }
}

/// Authoritative in-memory catalog state.
pub struct CatalogStore {
    games: Vec<Game>,
    search_term: String,
    selected_id: Option<u32>,
    draft: GameDraft,
    revision: u64,
}

impl CatalogStore {
    /// Build a store over the given records.
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games,
            search_term: String::new(),
            selected_id: None,
            draft: GameDraft::default(),
            revision: 0,
        }
    }

    /// Build a store preloaded with the fixed startup records.
    pub fn with_seed() -> Self {
        Self::new(seed_games())
    }

    /// Full record list in insertion order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Mutation generation of the record list. Bumps on every save or
    /// delete that changes the list, never on view-only changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Id of the record loaded into the form, if any.
    pub fn selected_id(&self) -> Option<u32> {
        self.selected_id
    }

    /// The form's working copy.
    pub fn draft(&self) -> &GameDraft {
        &self.draft
    }

    /// Mutable access for the form to edit the working copy in place.
    pub fn draft_mut(&mut self) -> &mut GameDraft {
        &mut self.draft
    }

    /// Whether the draft represents an edit of an existing record.
    pub fn is_editing(&self) -> bool {
        self.draft.id.is_some()
    }

    /// Records matching the search term, in catalog order. The term matches
    /// case-insensitively against title and genre label; an empty term
    /// yields the full list. Never mutates the underlying list.
    pub fn filtered_games(&self) -> Vec<&Game> {
        if self.search_term.trim().is_empty() {
            self.games.iter().collect()
        } else {
            let needle = self.search_term.to_lowercase();
            self.games
                .iter()
                .filter(|game| game_matches(game, &needle))
                .collect()
        }
    }

    /// Record count per platform, zero-filled over the full enumeration.
    pub fn platform_counts(&self) -> Vec<(Platform, usize)> {
        Platform::ALL
            .iter()
            .map(|platform| {
                let count = self
                    .games
                    .iter()
                    .filter(|game| game.platform == *platform)
                    .count();
                (*platform, count)
            })
            .collect()
    }

    /// Copy the given record into the draft and mark it as the selection.
    pub fn select_record(&mut self, record: &Game) {
        self.selected_id = Some(record.id);
        self.draft = GameDraft::from(record);
        debug!(id = record.id, "Record loaded into draft");
    }

    /// Reset the draft to all-empty values and drop the selection.
    pub fn clear_draft(&mut self) {
        self.draft = GameDraft::default();
        self.selected_id = None;
    }

    /// Replace the search term. Filtering is recomputed on read.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Validate the draft and commit it to the catalog.
    ///
    /// With an active selection (edit flow) a draft id matching an existing
    /// record replaces that record in place, position preserved; this
    /// deliberately extends to a *different* record whose id was typed
    /// while editing. Without a selection (create flow) a matching id is a
    /// duplicate-id violation. An unused id appends; an unset id is
    /// assigned the next integer above the current maximum, starting at 1.
    /// On success the draft and selection are cleared.
    pub fn save(&mut self) -> Result<SaveOutcome, Violation> {
        let draft = self.validate_draft()?;
        let editing = self.selected_id.is_some();

        let outcome = match draft.id {
            Some(id) => match self.games.iter().position(|game| game.id == id) {
                Some(pos) if editing => {
                    self.games[pos] = draft.into_game(id);
                    SaveOutcome::Updated(id)
                }
                Some(_) => return Err(Violation::DuplicateId),
                None => {
                    self.games.push(draft.into_game(id));
                    SaveOutcome::Created(id)
                }
            },
            None => {
                let id = self.next_id();
                self.games.push(draft.into_game(id));
                SaveOutcome::Created(id)
            }
        };

        self.clear_draft();
        self.revision += 1;
        info!(id = outcome.id(), total = self.games.len(), "Catalog saved");
        Ok(outcome)
    }

    /// Remove the selected record. The caller is expected to have asked the
    /// user for confirmation. Returns the removed id, or `None` when the
    /// selected record no longer exists (the operation is then a no-op
    /// beyond clearing the draft and selection).
    pub fn delete(&mut self) -> Result<Option<u32>, Violation> {
        let id = self.selected_id.ok_or(Violation::NoSelection)?;
        let removed = match self.games.iter().position(|game| game.id == id) {
            Some(pos) => {
                self.games.remove(pos);
                self.revision += 1;
                info!(id, total = self.games.len(), "Record deleted");
                Some(id)
            }
            None => {
                debug!(id, "Selected record already gone; clearing draft only");
                None
            }
        };
        self.clear_draft();
        Ok(removed)
    }

    /// Checks run in order: required fields, id format, release year
    /// format. The first violation wins.
    fn validate_draft(&self) -> Result<ValidDraft, Violation> {
        let draft = &self.draft;
        let title = draft.title.trim();
        let (genre, platform, score, release_year) = match (
            draft.genre,
            draft.platform,
            draft.score,
            draft.release_year,
        ) {
            (Some(genre), Some(platform), Some(score), Some(year)) if !title.is_empty() => {
                (genre, platform, score, year)
            }
            _ => return Err(Violation::MissingField),
        };

        if draft.id == Some(0) {
            return Err(Violation::InvalidId);
        }
        if !(1000..=9999).contains(&release_year) {
            return Err(Violation::InvalidReleaseYear);
        }

        Ok(ValidDraft {
            id: draft.id,
            title: title.to_string(),
            genre,
            platform,
            score,
            release_year,
        })
    }

    fn next_id(&self) -> u32 {
        self.games
            .iter()
            .map(|game| game.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

fn game_matches(game: &Game, needle: &str) -> bool {
    game.title.to_lowercase().contains(needle)
        || game.genre.label().to_lowercase().contains(needle)
}

/// Fixed records loaded at startup.
pub fn seed_games() -> Vec<Game> {
    vec![
        Game {
            id: 1,
            title: "The Witcher 3: Wild Hunt".to_string(),
            genre: Genre::Rpg,
            platform: Platform::Pc,
            score: 10,
            release_year: 2015,
        },
        Game {
            id: 2,
            title: "Red Dead Redemption 2".to_string(),
            genre: Genre::Aventura,
            platform: Platform::PlayStation,
            score: 9,
            release_year: 2018,
        },
        Game {
            id: 3,
            title: "Halo: Combat Evolved".to_string(),
            genre: Genre::Accion,
            platform: Platform::Xbox,
            score: 9,
            release_year: 2001,
        },
        Game {
            id: 4,
            title: "The Legend of Zelda: Breath of the Wild".to_string(),
            genre: Genre::Aventura,
            platform: Platform::NintendoSwitch,
            score: 10,
            release_year: 2017,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> GameDraft {
        GameDraft {
            id: None,
            title: "Hades".to_string(),
            genre: Some(Genre::Accion),
            platform: Some(Platform::Pc),
            score: Some(9),
            release_year: Some(2020),
        }
    }

    #[test]
    fn seed_matches_startup_contract() {
        let store = CatalogStore::with_seed();
        assert_eq!(store.games().len(), 4);
        assert_eq!(store.games().iter().map(|g| g.id).max(), Some(4));
        assert!(!store.is_editing());
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn save_with_fresh_id_appends_one_record() {
        let mut store = CatalogStore::with_seed();
        let mut draft = valid_draft();
        draft.id = Some(10);
        *store.draft_mut() = draft;

        let outcome = store.save().expect("save should succeed");
        assert_eq!(outcome, SaveOutcome::Created(10));
        assert_eq!(store.games().len(), 5);
        assert_eq!(store.games().last().map(|g| g.id), Some(10));
        // Draft and selection clear on success.
        assert_eq!(store.draft(), &GameDraft::default());
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn save_with_unset_id_assigns_next_above_max() {
        let mut store = CatalogStore::with_seed();
        *store.draft_mut() = valid_draft();

        let outcome = store.save().expect("save should succeed");
        assert_eq!(outcome, SaveOutcome::Created(5));
        assert_eq!(store.games().len(), 5);
        assert_eq!(store.games().last().map(|g| g.id), Some(5));
    }

    #[test]
    fn save_on_empty_catalog_starts_at_one() {
        let mut store = CatalogStore::new(Vec::new());
        *store.draft_mut() = valid_draft();

        let outcome = store.save().expect("save should succeed");
        assert_eq!(outcome, SaveOutcome::Created(1));
    }

    #[test]
    fn save_while_editing_replaces_in_place() {
        let mut store = CatalogStore::with_seed();
        let second = store.games()[1].clone();
        store.select_record(&second);
        assert!(store.is_editing());

        store.draft_mut().title = "Red Dead Redemption II".to_string();
        store.draft_mut().score = Some(10);

        let outcome = store.save().expect("save should succeed");
        assert_eq!(outcome, SaveOutcome::Updated(2));
        assert_eq!(store.games().len(), 4);
        // Position in the sequence is preserved.
        assert_eq!(store.games()[1].id, 2);
        assert_eq!(store.games()[1].title, "Red Dead Redemption II");
        assert_eq!(store.games()[1].score, 10);
    }

    #[test]
    fn editing_with_foreign_id_overwrites_that_record() {
        let mut store = CatalogStore::with_seed();
        let second = store.games()[1].clone();
        store.select_record(&second);
        store.draft_mut().id = Some(3);
        store.draft_mut().title = "Halo 2".to_string();

        let outcome = store.save().expect("save should succeed");
        assert_eq!(outcome, SaveOutcome::Updated(3));
        assert_eq!(store.games().len(), 4);
        // The typed id's record is overwritten in place, the selected one stays.
        assert_eq!(store.games()[2].id, 3);
        assert_eq!(store.games()[2].title, "Halo 2");
        assert_eq!(store.games()[1].title, "Red Dead Redemption 2");
    }

    #[test]
    fn creating_with_existing_id_is_rejected() {
        let mut store = CatalogStore::with_seed();
        let mut draft = valid_draft();
        draft.id = Some(3);
        *store.draft_mut() = draft.clone();

        assert_eq!(store.save(), Err(Violation::DuplicateId));
        assert_eq!(store.games().len(), 4);
        assert_eq!(store.games()[2].title, "Halo: Combat Evolved");
        // The rejected draft stays available for correction.
        assert_eq!(store.draft(), &draft);
    }

    #[test]
    fn save_rejects_missing_fields() {
        let mut store = CatalogStore::with_seed();
        let before = store.games().to_vec();

        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        *store.draft_mut() = draft.clone();
        assert_eq!(store.save(), Err(Violation::MissingField));

        let mut draft = valid_draft();
        draft.platform = None;
        *store.draft_mut() = draft;
        assert_eq!(store.save(), Err(Violation::MissingField));

        assert_eq!(store.games(), before.as_slice());
    }

    #[test]
    fn save_rejects_non_positive_id() {
        let mut store = CatalogStore::with_seed();
        let mut draft = valid_draft();
        draft.id = Some(0);
        *store.draft_mut() = draft;

        assert_eq!(store.save(), Err(Violation::InvalidId));
        assert_eq!(store.games().len(), 4);
    }

    #[test]
    fn save_rejects_release_year_without_four_digits() {
        let mut store = CatalogStore::with_seed();

        let mut draft = valid_draft();
        draft.release_year = Some(999);
        *store.draft_mut() = draft;
        assert_eq!(store.save(), Err(Violation::InvalidReleaseYear));

        let mut draft = valid_draft();
        draft.release_year = Some(20200);
        *store.draft_mut() = draft;
        assert_eq!(store.save(), Err(Violation::InvalidReleaseYear));

        assert_eq!(store.games().len(), 4);
    }

    #[test]
    fn validation_reports_first_violation() {
        let mut store = CatalogStore::with_seed();
        let mut draft = valid_draft();
        draft.genre = None;
        draft.release_year = Some(12);
        *store.draft_mut() = draft;

        assert_eq!(store.save(), Err(Violation::MissingField));
    }

    #[test]
    fn delete_requires_selection() {
        let mut store = CatalogStore::with_seed();
        assert_eq!(store.delete(), Err(Violation::NoSelection));
        assert_eq!(store.games().len(), 4);
    }

    #[test]
    fn delete_removes_exactly_the_selected_record() {
        let mut store = CatalogStore::with_seed();
        let third = store.games()[2].clone();
        store.select_record(&third);

        assert_eq!(store.delete(), Ok(Some(3)));
        assert_eq!(store.games().len(), 3);
        assert!(store.games().iter().all(|game| game.id != 3));
        assert_eq!(store.draft(), &GameDraft::default());
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn delete_of_vanished_record_only_clears_draft() {
        let mut store = CatalogStore::with_seed();
        let ghost = Game {
            id: 99,
            title: "Ghost".to_string(),
            genre: Genre::Estrategia,
            platform: Platform::Pc,
            score: 5,
            release_year: 1999,
        };
        store.select_record(&ghost);

        assert_eq!(store.delete(), Ok(None));
        assert_eq!(store.games().len(), 4);
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let mut store = CatalogStore::with_seed();
        store.set_search_term("WITCHER");
        let filtered = store.filtered_games();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "The Witcher 3: Wild Hunt");
    }

    #[test]
    fn search_matches_genre_label() {
        let mut store = CatalogStore::with_seed();
        store.set_search_term("aventura");
        let titles: Vec<&str> = store
            .filtered_games()
            .iter()
            .map(|game| game.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Red Dead Redemption 2",
                "The Legend of Zelda: Breath of the Wild"
            ]
        );
    }

    #[test]
    fn empty_search_returns_full_list_unmutated() {
        let mut store = CatalogStore::with_seed();
        store.set_search_term("zelda");
        assert_eq!(store.filtered_games().len(), 1);
        store.set_search_term("");
        assert_eq!(store.filtered_games().len(), 4);
        assert_eq!(store.games().len(), 4);
    }

    #[test]
    fn revision_tracks_list_mutations_only() {
        let mut store = CatalogStore::with_seed();
        let start = store.revision();

        store.set_search_term("halo");
        let halo = store.filtered_games()[0].clone();
        assert_eq!(store.revision(), start);

        *store.draft_mut() = valid_draft();
        store.save().expect("save should succeed");
        assert_eq!(store.revision(), start + 1);

        store.draft_mut().title = String::new();
        assert_eq!(store.save(), Err(Violation::MissingField));
        assert_eq!(store.revision(), start + 1);

        store.select_record(&halo);
        store.delete().expect("delete should succeed");
        assert_eq!(store.revision(), start + 2);
    }

    #[test]
    fn platform_counts_are_zero_filled() {
        let mut store = CatalogStore::with_seed();
        assert_eq!(
            store.platform_counts(),
            vec![
                (Platform::Pc, 1),
                (Platform::PlayStation, 1),
                (Platform::Xbox, 1),
                (Platform::NintendoSwitch, 1),
            ]
        );

        let xbox = store.games()[2].clone();
        store.select_record(&xbox);
        store.delete().expect("delete should succeed");
        assert_eq!(
            store.platform_counts(),
            vec![
                (Platform::Pc, 1),
                (Platform::PlayStation, 1),
                (Platform::Xbox, 0),
                (Platform::NintendoSwitch, 1),
            ]
        );
    }
}
