//! CLI argument definitions for the Krua application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use krua_core::SearchMode;

/// Krua — Thai recipe search and nutrition estimation.
#[derive(Parser, Debug)]
#[command(name = "krua", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Path to the recipe corpus JSON file.
    #[arg(short = 'd', long = "data")]
    pub data: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search recipes by free-text query.
    Search {
        /// The query text.
        query: String,

        /// Which recipe fields to match against.
        #[arg(short = 'm', long = "mode", value_enum, default_value_t = ModeArg::Combined)]
        mode: ModeArg,

        /// Number of results (config default when omitted).
        #[arg(short = 'k', long = "top-k")]
        top_k: Option<usize>,

        /// Use the deterministic mock embedding provider for the
        /// semantic pass. Without it, search is fuzzy-only.
        #[arg(long = "mock-embeddings")]
        mock_embeddings: bool,
    },

    /// Estimate nutrition totals for a recipe or raw ingredient text.
    Nutrition {
        /// Recipe to look up: a corpus index, or a name substring.
        recipe: Option<String>,

        /// Estimate directly from this ingredient text instead of a
        /// corpus recipe (newline-separated lines).
        #[arg(long = "text", conflicts_with = "recipe")]
        text: Option<String>,
    },
}

/// clap-facing mirror of [`SearchMode`].
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ModeArg {
    Combined,
    Ingredient,
    Name,
}

impl From<ModeArg> for SearchMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Combined => SearchMode::Combined,
            ModeArg::Ingredient => SearchMode::Ingredient,
            ModeArg::Name => SearchMode::Name,
        }
    }
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > KRUA_CONFIG env var > ~/.krua/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("KRUA_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".krua").join("config.toml");
    }
    PathBuf::from("config.toml")
}
