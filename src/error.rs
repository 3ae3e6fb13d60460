// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// local imports
use crate::{
    algorithm::Selection,
    xerr::{HighlightQuoted, HighlightedList, Suggestions},
};

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to serialize results: {0}")]
    Json(#[from] json::Error),
}

/// InputError is a recoverable error caused by the run input, detected before any matcher executes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("text is empty")]
    EmptyText,
    #[error("pattern list {} contains no patterns", .0.hlq())]
    NoPatterns(String),
}

/// ConfigurationError is an error caused by an algorithm selection that is not registered.
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("unknown algorithm {}, use any of {}", .name.hlq(), HighlightedList(Selection::names()))]
    UnknownAlgorithm { name: String, suggestions: Suggestions },
}

impl Error {
    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)?;
        if let Some(tip) = self.tip() {
            writeln!(target, "{} {}", "  tip:".green().bold(), tip)?;
        }
        Ok(())
    }

    /// A hint on how to fix the error, if there is one.
    pub fn tip(&self) -> Option<String> {
        match self {
            Self::Configuration(ConfigurationError::UnknownAlgorithm { suggestions, .. }) => {
                if suggestions.is_empty() {
                    None
                } else {
                    Some(suggestions.to_string())
                }
            }
            Self::Input(InputError::EmptyText) => Some("pass the text as an argument or use --file".into()),
            Self::Input(InputError::NoPatterns(_)) => {
                Some("pass a comma-separated list of patterns with --patterns".into())
            }
            _ => None,
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
