// src/config/mod.rs
use crate::ui::{Locale, Theme};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const APP_DIR: &str = "tabedit";
pub const SETTINGS_FILE: &str = "settings.json";

/// User preferences. Read once at startup and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub locale: Locale,
    pub word_wrap: bool,
    /// `tracing_subscriber::EnvFilter` directive, overridden by `TABEDIT_LOG`.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: Theme::default(),
            locale: Locale::default(),
            word_wrap: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Loads settings from `path`. A missing file yields defaults; an unreadable
    /// or malformed one is logged and also yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot read settings");
                return Self::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "ignoring malformed settings");
            Self::default()
        })
    }

    pub fn load() -> Self {
        Self::default_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }
}
