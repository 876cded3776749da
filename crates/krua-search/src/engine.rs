//! Top-level hybrid search orchestrator.
//!
//! A query runs a semantic pass first (when an embedding provider is
//! configured), then a fuzzy fallback when the semantic pass found
//! nothing convincing, and merges the two lists with semantic results
//! taking precedence per recipe index. Search never fails: a missing
//! provider, an unembeddable query, or an empty corpus all degrade to
//! fewer (possibly zero) results.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use krua_core::config::{CacheConfig, SearchConfig};
use krua_core::{MatchKind, RecipeCorpus, SearchMode, SearchResult};

use crate::cache::MatrixStore;
use crate::embedding::DynEmbeddingProvider;
use crate::fuzzy::fuzzy_search;
use crate::matrix::EmbeddingMatrix;

/// Hybrid recipe search over a fixed corpus.
///
/// The engine owns the corpus, the optional embedding provider, and the
/// lazily built embedding matrices. It is cheap to share behind an `Arc`;
/// `search` takes `&self` and is safe to call concurrently.
pub struct SearchEngine {
    corpus: RecipeCorpus,
    provider: Option<Box<dyn DynEmbeddingProvider>>,
    matrices: MatrixStore,
    config: SearchConfig,
    combined_texts: Vec<String>,
    ingredient_texts: Vec<String>,
    // Ingredient mode scores against the combined matrix when the
    // ingredient matrix is disabled (empty cache path).
    ingredient_matrix_enabled: bool,
}

impl SearchEngine {
    /// Build an engine without an embedding provider: fuzzy-only search.
    pub fn new(corpus: RecipeCorpus, config: SearchConfig, cache: &CacheConfig) -> Self {
        let combined_texts = corpus.iter().map(|r| r.combined_text()).collect();
        let ingredient_texts = corpus.iter().map(|r| r.ingredient.clone()).collect();
        let ingredient_matrix_enabled = !cache.ingredient_path.is_empty();
        Self {
            corpus,
            provider: None,
            matrices: MatrixStore::new(&cache.combined_path, &cache.ingredient_path),
            config,
            combined_texts,
            ingredient_texts,
            ingredient_matrix_enabled,
        }
    }

    /// Attach an embedding provider, enabling the semantic pass.
    pub fn with_provider(mut self, provider: Box<dyn DynEmbeddingProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn corpus(&self) -> &RecipeCorpus {
        &self.corpus
    }

    /// Run a search.
    ///
    /// `top_k` falls back to the configured default when `None` and is
    /// capped at the configured maximum. Returns at most `top_k` results
    /// sorted by similarity descending, with at most one result per
    /// recipe index.
    pub async fn search(
        &self,
        query: &str,
        mode: SearchMode,
        top_k: Option<usize>,
    ) -> Vec<SearchResult> {
        let top_k = top_k
            .unwrap_or(self.config.default_top_k)
            .min(self.config.max_top_k);
        if top_k == 0 || self.corpus.is_empty() {
            return Vec::new();
        }
        debug!(mode = mode.as_str(), top_k, "Search started");

        let mut results = self.semantic_pass(query, mode, top_k).await;

        let need_fallback =
            results.is_empty() || results[0].similarity < self.config.fallback_trigger;
        if need_fallback {
            debug!(
                semantic = results.len(),
                "Semantic pass inconclusive, running fuzzy fallback"
            );
            let mut seen: HashSet<usize> = results.iter().map(|r| r.index).collect();
            for result in fuzzy_search(query, &self.corpus, top_k, mode, &self.config) {
                if seen.insert(result.index) {
                    results.push(result);
                }
            }
            results.sort_by(|a, b| {
                b.similarity
                    .partial_cmp(&a.similarity)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        results.truncate(top_k);
        results
    }

    /// Semantic candidates: top `2 * top_k` rows by cosine similarity,
    /// kept above the mode's acceptance threshold. Empty when no provider
    /// is configured or the query cannot be embedded.
    async fn semantic_pass(&self, query: &str, mode: SearchMode, top_k: usize) -> Vec<SearchResult> {
        let provider = match &self.provider {
            Some(provider) => provider.as_ref(),
            None => return Vec::new(),
        };
        let query_vec = match provider.embed_boxed(query).await {
            Ok(vec) => vec,
            Err(e) => {
                debug!(error = %e, "Query embedding failed, skipping semantic pass");
                return Vec::new();
            }
        };

        let matrix = self.matrix_for(mode, provider).await;
        let threshold = match mode {
            SearchMode::Ingredient => self.config.semantic_threshold_ingredient,
            SearchMode::Combined | SearchMode::Name => self.config.semantic_threshold,
        };

        matrix
            .score(&query_vec)
            .into_iter()
            .take(2 * top_k)
            .filter(|(_, sim)| *sim >= threshold)
            .filter_map(|(index, similarity)| {
                let recipe = self.corpus.get(index)?;
                Some(SearchResult {
                    name: recipe.name.clone(),
                    similarity,
                    ingredients: recipe.ingredient.clone(),
                    method: recipe.method.clone(),
                    index,
                    match_kind: MatchKind::Semantic,
                    search_mode: mode,
                })
            })
            .collect()
    }

    async fn matrix_for(
        &self,
        mode: SearchMode,
        provider: &dyn DynEmbeddingProvider,
    ) -> Arc<EmbeddingMatrix> {
        match mode {
            SearchMode::Ingredient if self.ingredient_matrix_enabled => {
                self.matrices
                    .ingredient(provider, &self.ingredient_texts)
                    .await
            }
            _ => self.matrices.combined(provider, &self.combined_texts).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::MockEmbedding;
    use krua_core::Recipe;

    fn thai_corpus() -> RecipeCorpus {
        RecipeCorpus::from_records(vec![
            Recipe::new("ต้มยำกุ้ง", "กุ้ง 200 กรัม\nตะไคร้ 2 ต้น\nใบมะกรูด", "ต้มน้ำ ใส่กุ้ง ปรุงรส"),
            Recipe::new("ผัดไทย", "เส้นจันท์\nกุ้งแห้ง\nถั่วงอก", "แช่เส้น ผัดกับซอส"),
            Recipe::new("แกงเผ็ดไก่", "ไก่ 300 กรัม\nพริกแกง\nกะทิ", "ผัดพริกแกง ใส่ไก่"),
            Recipe::new("ส้มตำ", "มะละกอ\nพริก 5 เม็ด\nมะนาว", "ตำส่วนผสมรวมกัน"),
            Recipe::new("ข้าวผัด", "ข้าว 2 ถ้วย\nไข่ 2 ฟอง", "ผัดข้าวกับไข่"),
        ])
    }

    fn temp_cache(dir: &tempfile::TempDir) -> CacheConfig {
        CacheConfig {
            combined_path: dir.path().join("combined.json").display().to_string(),
            ingredient_path: dir.path().join("ingredient.json").display().to_string(),
        }
    }

    fn fuzzy_only_engine() -> SearchEngine {
        // Cache paths are never touched without a provider.
        SearchEngine::new(thai_corpus(), SearchConfig::default(), &CacheConfig::default())
    }

    #[tokio::test]
    async fn test_empty_corpus_returns_nothing() {
        let engine = SearchEngine::new(
            RecipeCorpus::default(),
            SearchConfig::default(),
            &CacheConfig::default(),
        );
        let results = engine.search("ต้มยำ", SearchMode::Combined, Some(5)).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_top_k_zero_returns_nothing() {
        let engine = fuzzy_only_engine();
        let results = engine.search("ต้มยำ", SearchMode::Name, Some(0)).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_no_provider_degrades_to_fuzzy() {
        let engine = fuzzy_only_engine();
        let results = engine.search("ต้มยำ", SearchMode::Name, Some(3)).await;
        assert!(!results.is_empty());
        assert!(results
            .iter()
            .all(|r| matches!(r.match_kind, MatchKind::Fuzzy | MatchKind::ContentMatch)));
    }

    #[tokio::test]
    async fn test_name_query_finds_tom_yum_goong() {
        let engine = fuzzy_only_engine();
        let results = engine.search("ต้มยำ", SearchMode::Name, Some(3)).await;
        assert_eq!(results[0].name, "ต้มยำกุ้ง");
        assert_eq!(results[0].match_kind, MatchKind::Fuzzy);
        assert_eq!(results[0].search_mode, SearchMode::Name);
    }

    #[tokio::test]
    async fn test_default_top_k_applied() {
        let mut config = SearchConfig::default();
        config.default_top_k = 1;
        let engine = SearchEngine::new(thai_corpus(), config, &CacheConfig::default());
        let results = engine.search("ต้มยำ", SearchMode::Name, None).await;
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_top_k_capped_at_max() {
        let mut config = SearchConfig::default();
        config.max_top_k = 2;
        let engine = SearchEngine::new(thai_corpus(), config, &CacheConfig::default());
        let results = engine.search("ผัด", SearchMode::Combined, Some(100)).await;
        assert!(results.len() <= 2);
    }

    #[tokio::test]
    async fn test_semantic_match_on_exact_text() {
        let dir = tempfile::tempdir().unwrap();
        let engine = SearchEngine::new(thai_corpus(), SearchConfig::default(), &temp_cache(&dir))
            .with_provider(Box::new(MockEmbedding::new()));

        // The combined text of recipe 2 embeds to exactly its own row.
        let query = thai_corpus().get(2).unwrap().combined_text();
        let results = engine.search(&query, SearchMode::Combined, Some(3)).await;
        assert_eq!(results[0].index, 2);
        assert_eq!(results[0].match_kind, MatchKind::Semantic);
        assert!((results[0].similarity - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_ingredient_mode_uses_ingredient_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let engine = SearchEngine::new(thai_corpus(), SearchConfig::default(), &temp_cache(&dir))
            .with_provider(Box::new(MockEmbedding::new()));

        let query = thai_corpus().get(1).unwrap().ingredient.clone();
        let results = engine.search(&query, SearchMode::Ingredient, Some(3)).await;
        assert_eq!(results[0].index, 1);
        assert_eq!(results[0].match_kind, MatchKind::Semantic);
        assert!((results[0].similarity - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_merge_prefers_semantic_per_index() {
        // Accept every semantic candidate but always trigger the fuzzy
        // fallback so both lists cover the same recipes.
        let dir = tempfile::tempdir().unwrap();
        let mut config = SearchConfig::default();
        config.semantic_threshold = -1.0;
        config.fallback_trigger = 2.0;
        let engine = SearchEngine::new(thai_corpus(), config, &temp_cache(&dir))
            .with_provider(Box::new(MockEmbedding::new()));

        let results = engine.search("ต้มยำ", SearchMode::Name, Some(5)).await;

        let mut indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), results.len(), "duplicate recipe index");

        // Every index covered semantically must keep its semantic entry.
        // With the threshold at -1.0 the semantic pass covers all rows.
        assert!(results
            .iter()
            .all(|r| r.match_kind == MatchKind::Semantic));
    }

    #[tokio::test]
    async fn test_unembeddable_query_falls_back_to_fuzzy() {
        let dir = tempfile::tempdir().unwrap();
        let engine = SearchEngine::new(thai_corpus(), SearchConfig::default(), &temp_cache(&dir))
            .with_provider(Box::new(MockEmbedding::new()));

        // MockEmbedding rejects empty text; the whitespace query embeds
        // fine but fuzzy-matches nothing, so test the empty query path.
        let results = engine.search("", SearchMode::Combined, Some(5)).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_results_sorted_descending() {
        let engine = fuzzy_only_engine();
        let results = engine.search("ผัด", SearchMode::Combined, Some(5)).await;
        for pair in results.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }
}
