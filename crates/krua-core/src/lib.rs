//! Krua core crate - shared types, configuration, and error taxonomy.
//!
//! Provides the recipe corpus model consumed by the search and nutrition
//! crates, the sectioned TOML configuration, and the top-level error type.

pub mod config;
pub mod error;
pub mod types;

pub use config::KruaConfig;
pub use error::{KruaError, Result};
pub use types::{MatchKind, Recipe, RecipeCorpus, SearchMode, SearchResult};
