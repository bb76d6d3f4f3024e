#![warn(clippy::all, missing_docs)]

//! Core domain logic for the Ludoteca catalog.
//!
//! This crate hosts the data models, the in-memory catalog store with its
//! validation rules, configuration handling, and the JSON snapshot export
//! used by the terminal UI.

pub mod catalog;
pub mod config;
pub mod export;
pub mod models;

pub use catalog::{CatalogStore, SaveOutcome, Violation};
pub use self::config::AppConfig;
pub use export::ExportManager;
pub use models::{Game, GameDraft, Genre, Platform, SCORES};
