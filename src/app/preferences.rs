use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Persisted user preferences. Currently just the chosen locale; the
/// file lives in the user config dir, not next to the catalog data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub locale: Option<String>,
}

impl Preferences {
    /// `$VITRINE_CONFIG_DIR/preferences.toml`, else
    /// `$HOME/.config/vitrine/preferences.toml`.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(dir) = env::var("VITRINE_CONFIG_DIR")
            && !dir.is_empty()
        {
            return Some(PathBuf::from(dir).join("preferences.toml"));
        }
        env::home_dir().map(|home| home.join(".config/vitrine/preferences.toml"))
    }

    /// Reads the preference file; any problem degrades to defaults so
    /// a corrupt file can never block startup.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(preferences) => preferences,
            Err(err) => {
                warn!("ignoring unreadable preferences: {err:#}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading preferences from {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("parsing preferences in {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("no config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let serialized = toml::to_string_pretty(self).context("serializing preferences")?;
        fs::write(path, serialized)
            .with_context(|| format!("writing preferences to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/preferences.toml");

        let preferences = Preferences {
            locale: Some("fr".to_string()),
        };
        preferences.save_to(&path).unwrap();

        let loaded = Preferences::load_from(&path).unwrap();
        assert_eq!(loaded.locale.as_deref(), Some("fr"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Preferences::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.locale.is_none());
    }

    #[test]
    fn garbage_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "locale = [not toml").unwrap();
        assert!(Preferences::load_from(&path).is_err());
    }
}
