use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

// =============================================================================
// Enums
// =============================================================================

/// Which recipe fields a search query is matched against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Name, ingredients, and method together (default).
    #[default]
    Combined,
    /// Ingredient text only.
    Ingredient,
    /// Recipe name only.
    Name,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Combined => "combined",
            SearchMode::Ingredient => "ingredient",
            SearchMode::Name => "name",
        }
    }
}

/// How a search result was matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Embedding cosine similarity.
    Semantic,
    /// Name closeness via the sequence ratio.
    Fuzzy,
    /// Token-level content scan.
    ContentMatch,
}

// =============================================================================
// Recipe corpus
// =============================================================================

/// A single recipe row from the dataset.
///
/// The serde aliases absorb the legacy column names of older dataset
/// exports (`text_ingradiant`, `food_method`), mirroring the loader's
/// column normalization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name of the dish.
    pub name: String,
    /// Newline-separated ingredient lines, possibly bullet-prefixed.
    #[serde(default, alias = "text_ingradiant")]
    pub ingredient: String,
    /// Cooking method text.
    #[serde(default, alias = "food_method")]
    pub method: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredient: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredient: ingredient.into(),
            method: method.into(),
        }
    }

    /// Name, ingredients, and method joined for combined-mode embedding.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.name, self.ingredient, self.method)
    }
}

/// The ordered recipe corpus. A recipe's position is its stable index;
/// search results and embedding matrices refer back to recipes by it.
#[derive(Clone, Debug, Default)]
pub struct RecipeCorpus {
    recipes: Vec<Recipe>,
}

impl RecipeCorpus {
    /// Build a corpus from an in-memory list of recipes.
    pub fn from_records(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load a corpus from a JSON array of recipe records.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
        info!(path = %path.display(), count = recipes.len(), "Recipe corpus loaded");
        Ok(Self { recipes })
    }

    /// Load a corpus, falling back to an empty one if the file is missing
    /// or unreadable. An empty corpus is a valid state: every search over
    /// it returns no results.
    pub fn load_json_or_empty(path: &Path) -> Self {
        match Self::load_json(path) {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Corpus unavailable, using empty");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Find the index of the first recipe whose name contains `needle`.
    pub fn find_by_name(&self, needle: &str) -> Option<usize> {
        self.recipes.iter().position(|r| r.name.contains(needle))
    }
}

// =============================================================================
// Search results
// =============================================================================

/// A single ranked search result. Created per query, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResult {
    /// Recipe name.
    pub name: String,
    /// Similarity score on a shared 0..=1 scale. Fuzzy-ratio scores are
    /// not true probabilities but are comparable with semantic scores.
    pub similarity: f64,
    /// Ingredient text of the matched recipe.
    pub ingredients: String,
    /// Method text of the matched recipe.
    pub method: String,
    /// Stable corpus index of the matched recipe.
    pub index: usize,
    /// How the match was produced.
    pub match_kind: MatchKind,
    /// The mode the query ran under.
    pub search_mode: SearchMode,
}
