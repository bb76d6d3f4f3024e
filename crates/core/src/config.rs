//! Application configuration handling.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::export::ExportManager;

/// Directory under the platform config root holding our files.
pub const CONFIG_DIR: &str = "ludoteca";
/// Name of the configuration file.
pub const CONFIG_FILE: &str = "config.toml";

/// User-tunable application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory receiving `videojuegos.json` exports.
    pub export_dir: PathBuf,
    /// Whether the platform chart panel is rendered.
    pub show_chart: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: ExportManager::default_root(),
            show_chart: true,
        }
    }
}

impl AppConfig {
    /// Location of the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load settings, layering the config file (when present) over defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    fn load_from(path: PathBuf) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("export_dir", defaults.export_dir.display().to_string())?
            .set_default("show_chart", defaults.show_chart)?;
        if path.exists() {
            builder = builder.add_source(File::from(path.clone()));
        }
        let settings = builder
            .build()
            .with_context(|| format!("failed to load {}", path.display()))?;
        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// Write a commented default configuration file on first run.
pub fn ensure_default_config() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let defaults = AppConfig::default();
    let contents = format!(
        "# Ludoteca configuration\n\n\
         # Directory receiving videojuegos.json exports.\n\
         export_dir = \"{}\"\n\n\
         # Render the platform chart panel.\n\
         show_chart = true\n",
        defaults.export_dir.display()
    );
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_apply_without_config_file() -> Result<()> {
        let dir = tempdir()?;
        let cfg = AppConfig::load_from(dir.path().join("missing.toml"))?;
        assert!(cfg.show_chart);
        assert_eq!(cfg.export_dir, ExportManager::default_root());
        Ok(())
    }

    #[test]
    fn config_file_overrides_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "export_dir = \"/tmp/exportaciones\"\nshow_chart = false\n",
        )?;

        let cfg = AppConfig::load_from(path)?;
        assert_eq!(cfg.export_dir, PathBuf::from("/tmp/exportaciones"));
        assert!(!cfg.show_chart);
        Ok(())
    }
}
