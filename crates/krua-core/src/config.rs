use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{KruaError, Result};

/// Top-level configuration for the Krua application.
///
/// Loaded from a TOML file. Every section and field has a default, so a
/// partial (or absent) file is always usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KruaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub nutrition: NutritionConfig,
}

impl Default for KruaConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            search: SearchConfig::default(),
            cache: CacheConfig::default(),
            nutrition: NutritionConfig::default(),
        }
    }
}

impl KruaConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: KruaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| KruaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Path to the recipe corpus JSON file.
    pub data_path: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_path: "thai_food_processed_cleaned.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Search ranking thresholds and limits.
///
/// `semantic_threshold` (acceptance of semantic candidates) and
/// `fallback_trigger` (when fuzzy search kicks in) are the same value by
/// default but are intentionally separate fields: they gate different
/// decisions and are tuned independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum cosine similarity for a semantic candidate (combined/name modes).
    pub semantic_threshold: f64,
    /// Minimum cosine similarity for a semantic candidate in ingredient mode.
    pub semantic_threshold_ingredient: f64,
    /// Fuzzy fallback runs when the best semantic score is below this.
    pub fallback_trigger: f64,
    /// Minimum sequence ratio for a direct name match (fuzzy phase A).
    pub name_cutoff: f64,
    /// A content-scan candidate qualifies strictly above this (fuzzy phase B).
    pub content_cutoff: f64,
    /// Default number of results when the caller does not say.
    pub default_top_k: usize,
    /// Hard cap on requested result counts.
    pub max_top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            semantic_threshold: 0.3,
            semantic_threshold_ingredient: 0.25,
            fallback_trigger: 0.3,
            name_cutoff: 0.3,
            content_cutoff: 0.4,
            default_top_k: 5,
            max_top_k: 50,
        }
    }
}

/// Embedding matrix cache locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache file for the combined-text matrix.
    pub combined_path: String,
    /// Cache file for the ingredient-only matrix.
    pub ingredient_path: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            combined_path: "embeddings.json".to_string(),
            ingredient_path: "embeddings_ingredient.json".to_string(),
        }
    }
}

/// Gram amounts used when an ingredient line carries no usable number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionConfig {
    /// Grams for "a little / trace" wording.
    pub trace_g: f64,
    /// Grams for "medium / moderate" wording.
    pub moderate_g: f64,
    /// Grams for "a lot / plenty" wording.
    pub plenty_g: f64,
    /// Grams when nothing in the line is recognized.
    pub default_amount_g: f64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            trace_g: 5.0,
            moderate_g: 30.0,
            plenty_g: 50.0,
            default_amount_g: 20.0,
        }
    }
}
