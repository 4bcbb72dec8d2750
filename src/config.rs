use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides where preferences are read and saved.
pub const PREFS_PATH_ENV: &str = "TUTHUB_PREFS";
pub const DEFAULT_PREFS_PATH: &str = "preferences.json";
pub const DEFAULT_TUTHUB_PATH: &str = "data/tuthub.json";

// ---------------------------------------------------------------------------
// GUI settings
// ---------------------------------------------------------------------------

/// Window geometry remembered between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuiSettings {
    pub window_width: f32,
    pub window_height: f32,
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            window_x: None,
            window_y: None,
        }
    }
}

// ---------------------------------------------------------------------------
// User preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPrefs {
    pub gui_settings: GuiSettings,
    pub tuthub_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            tuthub_file_path: PathBuf::from(DEFAULT_TUTHUB_PATH),
        }
    }
}

/// Where preferences live: `$TUTHUB_PREFS` if set, else `preferences.json`.
pub fn prefs_path() -> PathBuf {
    std::env::var_os(PREFS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH))
}

/// Read preferences. `Ok(None)` when the file does not exist.
pub fn read_prefs(path: &Path) -> Result<Option<UserPrefs>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading preferences from {}", path.display()))?;
    let prefs = serde_json::from_str(&text).context("parsing preferences")?;
    Ok(Some(prefs))
}

/// Read preferences, falling back to defaults when missing or unreadable.
pub fn load_prefs(path: &Path) -> UserPrefs {
    match read_prefs(path) {
        Ok(Some(prefs)) => {
            log::info!("Loaded preferences from {}", path.display());
            prefs
        }
        Ok(None) => {
            log::info!("No preferences at {}, using defaults", path.display());
            UserPrefs::default()
        }
        Err(e) => {
            log::warn!("Ignoring unreadable preferences: {e:#}");
            UserPrefs::default()
        }
    }
}

pub fn save_prefs(path: &Path, prefs: &UserPrefs) -> Result<()> {
    crate::data::storage::write_json(path, prefs)
}
