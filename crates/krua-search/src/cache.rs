//! On-disk embedding matrix cache and the per-process lazy store.
//!
//! Cache reads distinguish three outcomes: `Hit` (usable matrix), `Miss`
//! (no file), and `Corrupt` (unreadable, undeserializable, or misaligned
//! with the corpus). Both `Miss` and `Corrupt` are recoverable: the
//! matrix is rebuilt from the provider and re-persisted. Persistence
//! failures are swallowed with a warning; a cache problem must never
//! surface to a search caller.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::embedding::DynEmbeddingProvider;
use crate::matrix::EmbeddingMatrix;

/// Outcome of a cache read.
#[derive(Clone, Debug, PartialEq)]
pub enum CacheOutcome {
    /// A matrix aligned with the corpus was loaded.
    Hit(EmbeddingMatrix),
    /// No cache file exists.
    Miss,
    /// The file exists but is unreadable, undeserializable, or has the
    /// wrong row count. Recoverable: log and recompute.
    Corrupt,
}

/// Read a cached matrix, validating alignment against the corpus size.
pub fn load(path: &Path, expected_rows: usize) -> CacheOutcome {
    if !path.exists() {
        return CacheOutcome::Miss;
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cache unreadable");
            return CacheOutcome::Corrupt;
        }
    };
    let matrix: EmbeddingMatrix = match serde_json::from_str(&content) {
        Ok(matrix) => matrix,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cache undeserializable");
            return CacheOutcome::Corrupt;
        }
    };
    if matrix.len() != expected_rows {
        warn!(
            path = %path.display(),
            rows = matrix.len(),
            expected = expected_rows,
            "Cache misaligned with corpus"
        );
        return CacheOutcome::Corrupt;
    }
    debug!(path = %path.display(), rows = matrix.len(), "Cache hit");
    CacheOutcome::Hit(matrix)
}

/// Persist a matrix, swallowing failures.
///
/// A failed write only costs a recompute on the next process start.
pub fn store(path: &Path, matrix: &EmbeddingMatrix) {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string(matrix)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    };
    match write() {
        Ok(()) => info!(path = %path.display(), rows = matrix.len(), "Cache written"),
        Err(e) => warn!(path = %path.display(), error = %e, "Cache write failed, continuing"),
    }
}

/// Process-wide lazy store for the two embedding matrices.
///
/// Each matrix is initialized at most once per process: the first caller
/// reads the disk cache, rebuilds via the provider on Miss/Corrupt, and
/// persists the fresh result. Concurrent first callers are serialized by
/// the `OnceCell`; afterwards the matrices are immutable shared reads.
#[derive(Debug, Default)]
pub struct MatrixStore {
    combined_path: PathBuf,
    ingredient_path: PathBuf,
    combined: OnceCell<Arc<EmbeddingMatrix>>,
    ingredient: OnceCell<Arc<EmbeddingMatrix>>,
}

impl MatrixStore {
    pub fn new(combined_path: impl Into<PathBuf>, ingredient_path: impl Into<PathBuf>) -> Self {
        Self {
            combined_path: combined_path.into(),
            ingredient_path: ingredient_path.into(),
            combined: OnceCell::new(),
            ingredient: OnceCell::new(),
        }
    }

    /// Get or build the combined-text matrix.
    pub async fn combined(
        &self,
        provider: &dyn DynEmbeddingProvider,
        texts: &[String],
    ) -> Arc<EmbeddingMatrix> {
        self.get_or_build(&self.combined, &self.combined_path, provider, texts)
            .await
    }

    /// Get or build the ingredient-only matrix.
    pub async fn ingredient(
        &self,
        provider: &dyn DynEmbeddingProvider,
        texts: &[String],
    ) -> Arc<EmbeddingMatrix> {
        self.get_or_build(&self.ingredient, &self.ingredient_path, provider, texts)
            .await
    }

    async fn get_or_build(
        &self,
        cell: &OnceCell<Arc<EmbeddingMatrix>>,
        path: &Path,
        provider: &dyn DynEmbeddingProvider,
        texts: &[String],
    ) -> Arc<EmbeddingMatrix> {
        cell.get_or_init(|| async {
            match load(path, texts.len()) {
                CacheOutcome::Hit(matrix) => Arc::new(matrix),
                outcome => {
                    debug!(?outcome, path = %path.display(), "Building embedding matrix");
                    let matrix = EmbeddingMatrix::build(provider, texts).await;
                    store(path, &matrix);
                    Arc::new(matrix)
                }
            }
        })
        .await
        .clone()
    }
}
