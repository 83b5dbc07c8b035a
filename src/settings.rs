//! Persisted user preferences
//!
//! Theme and the spellcheck toggle survive across games as a small JSON file
//! under the platform config directory. Everything else is per-session.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Color theme for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

/// User preferences that persist across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_theme")]
    pub theme: Theme,

    /// Whether guesses are validated against the dictionary
    #[serde(default = "default_spellcheck")]
    pub spellcheck: bool,
}

fn default_theme() -> Theme {
    Theme::Dark
}

fn default_spellcheck() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            spellcheck: default_spellcheck(),
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordgrid").join("settings.json"))
    }

    /// Load settings from disk, falling back to defaults on any failure
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(%err, "settings file unreadable, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write settings to disk, creating the config directory if needed
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = Self::config_path() else {
            return Err(io::Error::other("no config directory on this platform"));
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, contents)
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub fn toggle_spellcheck(&mut self) {
        self.spellcheck = !self.spellcheck;
    }
}
