// std imports
use std::path::PathBuf;

// third-party imports
use once_cell::sync::{Lazy, OnceCell};

// local imports
use crate::{appdirs::AppDirs, error::Result, settings::Settings};

// ---

pub const APP_NAME: &str = "strmatch";
pub const CONFIG_ENV: &str = "STRMATCH_CONFIG";

static GLOBAL: OnceCell<Settings> = OnceCell::new();
static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns the process-wide settings, or the embedded defaults if they were not initialized.
pub fn get() -> &'static Settings {
    GLOBAL.get().unwrap_or_else(default)
}

pub fn default() -> &'static Settings {
    &DEFAULT
}

/// Sets the process-wide settings, only the first call has an effect.
pub fn initialize(settings: Settings) {
    if GLOBAL.set(settings).is_err() {
        log::warn!("settings are already initialized");
    }
}

/// Loads settings from the embedded defaults and the user configuration file.
pub fn load() -> Result<Settings> {
    Settings::load(path().as_deref())
}

/// Location of the user configuration file, `$STRMATCH_CONFIG` takes precedence.
pub fn path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(|| app_dirs().map(|dirs| dirs.config_dir.join("config.yaml")))
}

pub fn app_dirs() -> Option<AppDirs> {
    AppDirs::new(APP_NAME)
}
