use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SETTINGS_DIR: &str = ".dialclock";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tick driver period. The clock still advances by exactly one second
    /// per tick; lowering this speeds the clock up rather than smoothing it.
    pub tick_interval_ms: u64,
    pub show_hour_marks: bool,
    pub face_color: String,
    pub minute_hand_color: String,
    pub second_hand_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            show_hour_marks: true,
            face_color: "white".to_string(),
            minute_hand_color: "cyan".to_string(),
            second_hand_color: "red".to_string(),
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

pub fn get_settings_path() -> Option<PathBuf> {
    home_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "cannot determine settings directory")
    })?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(&path, content)?;
    }
    Ok(path)
}

/// Load settings, falling back to defaults when the file is missing or
/// malformed.
pub fn load_settings() -> Settings {
    get_settings_path()
        .and_then(|path| load_from(&path))
        .unwrap_or_default()
}

fn load_from(path: &std::path::Path) -> Option<Settings> {
    let data = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(settings) => Some(settings),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed settings");
            None
        }
    }
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot determine home directory"))?
        .join(SETTINGS_DIR)
        .join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
