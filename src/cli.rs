// std imports
use std::{path::PathBuf, time::Duration};

// third-party imports
use clap::{Parser, ValueEnum};

// local imports
use crate::{config, settings::OutputFormat};

// ---

/// Exact string matching with step-by-step algorithm traces.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Text to search in, the configured sample text is used if neither text nor --file is given.
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file, use '-' for stdin.
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Comma-separated list of patterns.
    #[arg(
        long,
        short,
        env = "STRMATCH_PATTERNS",
        default_value_t = config::get().patterns.clone(),
        overrides_with = "patterns",
    )]
    pub patterns: String,

    /// Algorithm to run: kmp, rabin-karp, z-algorithm, or all to compare them.
    #[arg(
        long,
        short,
        env = "STRMATCH_ALGORITHM",
        default_value_t = config::get().algorithm.to_string(),
        overrides_with = "algorithm",
    )]
    pub algorithm: String,

    /// Ignore case when matching.
    #[arg(long, short, overrides_with = "match_case")]
    pub ignore_case: bool,

    /// Match case, overrides --ignore-case option and the configured default.
    #[arg(long, overrides_with = "ignore_case")]
    pub match_case: bool,

    /// Print the step trace of every result.
    #[arg(long, short)]
    pub trace: bool,

    /// Play the step trace back one step at a time.
    #[arg(long)]
    pub play: bool,

    /// Delay between steps in --play mode, e.g. 250ms or 1s.
    #[arg(long, env = "STRMATCH_PLAYBACK_INTERVAL", value_parser = humantime::parse_duration)]
    pub interval: Option<Duration>,

    /// Output format.
    #[arg(long, value_enum, env = "STRMATCH_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Color output options.
    #[arg(long, default_value = "auto", env = "STRMATCH_COLOR", overrides_with = "color")]
    #[arg(value_enum)]
    pub color: ColorOption,

    /// List available algorithms and exit.
    #[arg(long)]
    pub list_algorithms: bool,
}

impl Opt {
    /// Resolves case sensitivity against the configured default.
    pub fn case_insensitive(&self, default: bool) -> bool {
        if self.ignore_case {
            true
        } else if self.match_case {
            false
        } else {
            default
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}
