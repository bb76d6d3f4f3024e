//! One-shot JSON snapshot export.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Game;

/// File name the export contract prescribes.
pub const EXPORT_FILE_NAME: &str = "videojuegos.json";

/// Serialize the record list exactly as it is exported: a pretty-printed
/// JSON array with 2-space indentation and the stable field order
/// {id, title, genre, platform, score, releaseYear}.
pub fn snapshot_json(games: &[Game]) -> Result<String> {
    serde_json::to_string_pretty(games).context("failed to serialize catalog snapshot")
}

/// Writer delivering catalog snapshots to a directory.
///
/// The store itself is agnostic to how the bytes reach the user; this is
/// the download collaborator.
pub struct ExportManager {
    root: PathBuf,
}

impl ExportManager {
    /// Create a new manager rooted at the provided directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default location: the user's download directory, falling back to
    /// the current directory.
    pub fn default_root() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Directory receiving exported snapshots.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the full record list to `videojuegos.json`, creating the
    /// directory if needed, and return the written path.
    pub fn export(&self, games: &[Game]) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create {}", self.root.display()))?;
        let path = self.root.join(EXPORT_FILE_NAME);
        let serialised = snapshot_json(games)?;
        fs::write(&path, serialised)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), records = games.len(), "Snapshot exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use tempfile::tempdir;

    #[test]
    fn snapshot_round_trips_to_an_equal_list() -> Result<()> {
        let store = CatalogStore::with_seed();
        let json = snapshot_json(store.games())?;
        let parsed: Vec<Game> = serde_json::from_str(&json)?;
        assert_eq!(parsed.as_slice(), store.games());
        Ok(())
    }

    #[test]
    fn snapshot_keeps_field_order_and_labels() -> Result<()> {
        let store = CatalogStore::with_seed();
        let json = snapshot_json(store.games())?;

        // 2-space indentation with the id leading every record.
        assert!(json.starts_with("[\n  {\n    \"id\": 1,"));
        let keys = ["\"id\"", "\"title\"", "\"genre\"", "\"platform\"", "\"score\"", "\"releaseYear\""];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| json.find(key).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(json.contains("\"genre\": \"Acción\""));
        assert!(json.contains("\"platform\": \"Nintendo Switch\""));
        Ok(())
    }

    #[test]
    fn export_writes_the_named_file() -> Result<()> {
        let dir = tempdir()?;
        let manager = ExportManager::new(dir.path().join("descargas"));
        let store = CatalogStore::with_seed();

        let path = manager.export(store.games())?;
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some(EXPORT_FILE_NAME)
        );

        let content = fs::read_to_string(&path)?;
        let parsed: Vec<Game> = serde_json::from_str(&content)?;
        assert_eq!(parsed.len(), 4);
        Ok(())
    }
}
