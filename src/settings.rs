use configparser::ini::Ini;
use log::warn;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const SETTINGS_INI_PATH: &str = "settings.ini";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Display refresh rate in Hz, used to pick the base scroll speed.
    pub refresh_rate_hz: u32,
    /// Level file handed to the chart loader.
    pub chart_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_rate_hz: 60,
            chart_path: PathBuf::from("assets/level3.csv"),
        }
    }
}

impl Settings {
    /// Base scroll speed in pixels per frame. Standard-rate displays get
    /// bigger steps so notes cover the window in the same wall time as a
    /// high-refresh display taking smaller ones.
    pub fn base_scroll_speed(&self) -> i32 {
        if self.refresh_rate_hz <= 60 { 4 } else { 2 }
    }
}

// Global static for the current settings.
static SETTINGS: Lazy<Mutex<Settings>> = Lazy::new(|| Mutex::new(Settings::default()));

/// Loads `settings.ini` into the global settings. A missing file or missing
/// keys fall back to defaults; nothing is written to disk.
pub fn load() {
    *SETTINGS.lock().unwrap() = read_from(SETTINGS_INI_PATH);
}

/// Returns a copy of the currently loaded settings.
pub fn get() -> Settings {
    SETTINGS.lock().unwrap().clone()
}

/// Reads one settings file without touching the global state.
pub fn read_from(path: impl AsRef<Path>) -> Settings {
    let path = path.as_ref();
    let defaults = Settings::default();

    if !path.exists() {
        warn!("Settings file '{}' not found, using defaults.", path.display());
        return defaults;
    }
    let mut conf = Ini::new();
    if conf.load(path).is_err() {
        warn!("Failed to load '{}', using default settings.", path.display());
        return defaults;
    }

    Settings {
        refresh_rate_hz: conf
            .get("display", "RefreshRate")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(defaults.refresh_rate_hz),
        chart_path: conf
            .get("game", "ChartPath")
            .map(PathBuf::from)
            .unwrap_or(defaults.chart_path),
    }
}
