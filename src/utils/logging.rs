// src/utils/logging.rs
use crate::config::{Settings, APP_DIR};
use anyhow::{anyhow, Context};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "tabedit.log";
/// Overrides `log_level` from the settings file, e.g. `TABEDIT_LOG=debug`.
pub const LOG_ENV: &str = "TABEDIT_LOG";

pub fn default_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

fn filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sends tracing output to `path`. The terminal belongs to the editor, so
/// nothing is ever logged to stdout or stderr.
pub fn init_at(path: &Path, settings: &Settings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("logger already installed: {e}"))
}

pub fn init(settings: &Settings) -> anyhow::Result<PathBuf> {
    let path = default_path().context("no cache directory on this platform")?;
    init_at(&path, settings)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_falls_back_on_bad_level() {
        let settings = Settings {
            log_level: "not a [level".into(),
            ..Settings::default()
        };
        if std::env::var_os(LOG_ENV).is_none() {
            assert!(filter(&settings).to_string().contains("info"));
        }
    }

    #[test]
    fn test_default_path_ends_with_log_file() {
        if let Some(path) = default_path() {
            assert!(path.ends_with(Path::new(APP_DIR).join(LOG_FILE)));
        }
    }
}
