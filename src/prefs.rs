//! On-disk preference store.
//!
//! Two values survive restarts: the accent theme and the dark-mode flag.
//! They are stored under their historical key names in a small JSON file
//! in the user's config directory. A missing or unreadable file leaves
//! the compiled-in defaults untouched; saving is best-effort.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::ThemePreference;

/// Persisted preferences. `isDarkMode` is a *string* flag
/// (`"true"`/`"false"`), matching the format the values have always been
/// stored in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "currentTheme", skip_serializing_if = "Option::is_none")]
    pub current_theme: Option<String>,
    #[serde(rename = "isDarkMode", skip_serializing_if = "Option::is_none")]
    pub is_dark_mode: Option<String>,
}

impl Preferences {
    /// Decode the stored theme, if present and well-formed.
    pub fn theme(&self) -> Option<ThemePreference> {
        let stored = self.current_theme.as_deref()?;
        match ThemePreference::from_stored(stored) {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("ignoring stored theme: {e}");
                None
            }
        }
    }

    /// Decode the stored dark-mode flag, if present.
    pub fn dark_mode(&self) -> Option<bool> {
        self.is_dark_mode.as_deref().map(|s| s == "true")
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.current_theme = Some(theme.to_stored());
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.is_dark_mode = Some(dark.to_string());
    }
}

pub fn prefs_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("folio").join("prefs.json")
}

pub fn load() -> Preferences {
    load_from(&prefs_path())
}

pub fn save(prefs: &Preferences) {
    save_to(prefs, &prefs_path());
}

fn load_from(path: &Path) -> Preferences {
    match fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("unreadable preference file {}: {e}", path.display());
            Preferences::default()
        }),
        Err(_) => Preferences::default(),
    }
}

fn save_to(prefs: &Preferences, path: &Path) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let data = match serde_json::to_string_pretty(prefs) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("could not encode preferences: {e}");
            return;
        }
    };
    if let Err(e) = fs::write(path, data) {
        log::warn!("could not write {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{NamedPalette, Rgb};

    #[test]
    fn absent_keys_mean_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme(), None);
        assert_eq!(prefs.dark_mode(), None);
    }

    #[test]
    fn historical_key_names_and_string_flag() {
        let mut prefs = Preferences::default();
        prefs.set_theme(ThemePreference::Custom(Rgb::new(0x21, 0x96, 0xf3)));
        prefs.set_dark_mode(true);
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"currentTheme\":\"#2196f3\""));
        assert!(json.contains("\"isDarkMode\":\"true\""));
    }

    #[test]
    fn dark_mode_round_trips_through_save_and_load() {
        let dir = std::env::temp_dir().join(format!("folio-prefs-{}", std::process::id()));
        let path = dir.join("prefs.json");
        let mut prefs = Preferences::default();

        prefs.set_dark_mode(true);
        save_to(&prefs, &path);
        assert_eq!(load_from(&path).dark_mode(), Some(true));

        // toggling twice restores the original persisted value
        prefs.set_dark_mode(false);
        save_to(&prefs, &path);
        assert_eq!(load_from(&path).dark_mode(), Some(false));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn corrupt_stored_theme_is_ignored() {
        let prefs = Preferences {
            current_theme: Some("not-a-color".into()),
            is_dark_mode: None,
        };
        assert_eq!(prefs.theme(), None);
    }

    #[test]
    fn named_theme_survives_the_store() {
        let mut prefs = Preferences::default();
        prefs.set_theme(ThemePreference::Named(NamedPalette::Green));
        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme(), Some(ThemePreference::Named(NamedPalette::Green)));
    }
}
