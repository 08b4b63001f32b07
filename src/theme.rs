use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::PreferenceError;

/// Key the display mode is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only an explicit "light" selects light mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Small string key-value file kept as pretty JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceStore {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
    #[serde(skip)]
    path: PathBuf,
}

impl PreferenceStore {
    /// Default location: `<config dir>/github-profile-viewer/preferences.json`.
    pub fn default_path() -> Result<PathBuf, PreferenceError> {
        Ok(dirs::config_dir()
            .ok_or(PreferenceError::NoConfigDir)?
            .join("github-profile-viewer")
            .join("preferences.json"))
    }

    /// Load the store at `path`. A missing file is an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();
        let mut store = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str::<PreferenceStore>(&contents)?
        } else {
            PreferenceStore::default()
        };
        store.path = path;
        Ok(store)
    }

    /// Load the store at `path`, falling back to an empty store when the
    /// location is unknown or the file cannot be read. Preferences never keep
    /// the viewer from starting.
    pub fn load_or_default(path: Option<PathBuf>) -> Self {
        let path = match path.map_or_else(Self::default_path, Ok) {
            Ok(path) => path,
            Err(e) => {
                warn!("Preferences will not be saved: {}", e);
                return PreferenceStore::default();
            }
        };

        match Self::load(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!("Ignoring preferences in {}: {}", path.display(), e);
                PreferenceStore {
                    path,
                    ..PreferenceStore::default()
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set `key` and write the whole store back to disk. On failure the store
    /// keeps its previous value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let previous = self.values.insert(key.to_string(), value.to_string());

        if let Err(e) = self.write() {
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        debug!("Saved {}={} to {}", key, value, self.path.display());
        Ok(())
    }

    fn write(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Current display mode, backed by a [`PreferenceStore`].
#[derive(Debug)]
pub struct ThemePreference {
    theme: Theme,
    store: PreferenceStore,
}

impl ThemePreference {
    /// Restore the mode saved by a previous run.
    pub fn restore(store: PreferenceStore) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY));
        ThemePreference { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip light/dark and persist the new mode. The mode only changes once
    /// it has been written.
    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.theme.toggled();
        self.store.set(THEME_KEY, next.as_str())?;
        self.theme = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_light_is_light() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn toggle_persists_across_restores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut pref = ThemePreference::restore(PreferenceStore::load(&path).unwrap());
        assert_eq!(pref.theme(), Theme::Dark);
        assert_eq!(pref.toggle().unwrap(), Theme::Light);

        let restored = ThemePreference::restore(PreferenceStore::load(&path).unwrap());
        assert_eq!(restored.theme(), Theme::Light);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"theme\": \"light\""));
    }

    #[test]
    fn failed_write_keeps_current_theme() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let store = PreferenceStore::load(blocker.join("prefs.json")).unwrap();
        let mut pref = ThemePreference::restore(store);
        assert!(pref.toggle().is_err());
        assert_eq!(pref.theme(), Theme::Dark);
        assert_eq!(pref.store.get(THEME_KEY), None);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = PreferenceStore::load_or_default(Some(path.clone()));
        assert_eq!(store.path(), path.as_path());
        let mut pref = ThemePreference::restore(store);
        assert_eq!(pref.theme(), Theme::Dark);

        // The next toggle overwrites the broken file.
        pref.toggle().unwrap();
        let restored = ThemePreference::restore(PreferenceStore::load(&path).unwrap());
        assert_eq!(restored.theme(), Theme::Light);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            PreferenceStore::load(&path),
            Err(PreferenceError::Json(_))
        ));
    }
}
