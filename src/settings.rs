// std imports
use std::{include_str, path::Path, time::Duration};

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::{algorithm::Selection, error::Error, serdex};

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub algorithm: Selection,
    pub ignore_case: bool,
    pub text: String,
    pub patterns: String,
    pub playback: PlaybackSettings,
    pub output: OutputSettings,
}

impl Settings {
    /// Loads embedded defaults overlaid with the optional user configuration file.
    ///
    /// A missing user file is not an error.
    pub fn load(user: Option<&Path>) -> Result<Self, Error> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        if let Some(path) = user {
            log::debug!("loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).required(false));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()
            .and_then(Config::try_deserialize)
            .expect("embedded default settings are valid")
    }
}

// ---

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlaybackSettings {
    #[serde(deserialize_with = "serdex::duration")]
    pub interval: Duration,
}

// ---

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub trace: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests;
