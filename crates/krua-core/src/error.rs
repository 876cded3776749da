use thiserror::Error;

/// Top-level error type for the Krua system.
///
/// Each variant wraps a subsystem-specific failure as a message. Note that
/// data-quality conditions (empty query, unknown ingredient, missing
/// embedding cache) are deliberately *not* errors anywhere in this
/// workspace; they degrade to weaker but defined behavior. Variants here
/// cover genuine operational failures only.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KruaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for KruaError {
    fn from(err: toml::de::Error) -> Self {
        KruaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for KruaError {
    fn from(err: toml::ser::Error) -> Self {
        KruaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for KruaError {
    fn from(err: serde_json::Error) -> Self {
        KruaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Krua operations.
pub type Result<T> = std::result::Result<T, KruaError>;
