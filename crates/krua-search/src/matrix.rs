//! Embedding matrix aligned with the recipe corpus, and the cosine
//! similarity scorer over it.
//!
//! Row `i` of a matrix is the embedding of recipe `i`; the invariant is
//! that the row count equals the corpus length (an absent matrix is
//! represented by not having one at all, never by a partial one).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::embedding::DynEmbeddingProvider;

/// An ordered sequence of embedding vectors, one per recipe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddingMatrix {
    rows: Vec<Vec<f32>>,
}

impl EmbeddingMatrix {
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    /// Embed every text in corpus order.
    ///
    /// A row that fails to embed (e.g. empty text) becomes a zero vector
    /// rather than failing the whole build; zero rows score 0.0 against
    /// any query, so the degraded recipe simply never ranks semantically.
    pub async fn build(provider: &dyn DynEmbeddingProvider, texts: &[String]) -> Self {
        let dims = provider.dimensions();
        let mut rows = Vec::with_capacity(texts.len());
        for (i, text) in texts.iter().enumerate() {
            match provider.embed_boxed(text).await {
                Ok(vec) => rows.push(vec),
                Err(e) => {
                    warn!(row = i, error = %e, "Embedding failed, using zero vector");
                    rows.push(vec![0.0; dims]);
                }
            }
        }
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Score every row against the query vector.
    ///
    /// Returns `(index, similarity)` pairs sorted by descending cosine
    /// similarity; rows with equal scores keep ascending index order
    /// (stable sort).
    pub fn score(&self, query: &[f32]) -> Vec<(usize, f64)> {
        let mut scored: Vec<(usize, f64)> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i, cosine_similarity(query, row)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude or the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum();

    let mag_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}
