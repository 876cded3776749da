//! Krua search crate - hybrid recipe search.
//!
//! Combines semantic embedding search (when an embedding provider and a
//! precomputed matrix are available) with a deterministic fuzzy fallback
//! over recipe names and content. Provides the embedding provider trait
//! with a mock implementation, the cosine similarity scorer, the on-disk
//! matrix cache, and the top-level search orchestrator.

pub mod cache;
pub mod embedding;
pub mod engine;
pub mod fuzzy;
pub mod matrix;

pub use cache::{CacheOutcome, MatrixStore};
pub use embedding::{DynEmbeddingProvider, EmbeddingProvider, MockEmbedding};
pub use engine::SearchEngine;
pub use fuzzy::{fuzzy_search, sequence_ratio};
pub use matrix::EmbeddingMatrix;
