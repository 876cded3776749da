//! Free-text quantity estimation.
//!
//! Derives a gram amount from an ingredient line. This is a heuristic,
//! not an exact parse: the first number in the line is taken as the
//! quantity even when it is actually a piece count, and lines with no
//! recognizable quantity fall back to fixed defaults. The function is
//! total and deterministic for any input.

use krua_core::config::NutritionConfig;
use regex::Regex;

use crate::table::{QuantityHint, Unit};

/// Quantity estimator with a pre-compiled number pattern.
pub struct QuantityEstimator {
    number_re: Regex,
    config: NutritionConfig,
}

impl Default for QuantityEstimator {
    fn default() -> Self {
        Self::new(NutritionConfig::default())
    }
}

impl QuantityEstimator {
    pub fn new(config: NutritionConfig) -> Self {
        Self {
            // Pattern is a fixed literal; compilation cannot fail.
            number_re: Regex::new(r"\d+(?:\.\d+)?").expect("valid number regex"),
            config,
        }
    }

    /// Estimate the gram amount described by an ingredient line.
    ///
    /// Priority order:
    /// 1. First number in the line combined with a co-occurring unit
    ///    keyword (kilogram, gram, tablespoon, teaspoon, cup).
    /// 2. Descriptive wording (a little / medium / a lot).
    /// 3. The configured default (20 g).
    pub fn estimate(&self, text: &str) -> f64 {
        if let Some(m) = self.number_re.find(text) {
            // First number found is authoritative, even if several appear.
            if let Ok(amount) = m.as_str().parse::<f64>() {
                for unit in Unit::PRIORITY {
                    if unit.keywords().iter().any(|kw| text.contains(kw)) {
                        return amount * unit.grams_factor();
                    }
                }
            }
        }

        for hint in QuantityHint::PRIORITY {
            if hint.keywords().iter().any(|kw| text.contains(kw)) {
                return match hint {
                    QuantityHint::Trace => self.config.trace_g,
                    QuantityHint::Moderate => self.config.moderate_g,
                    QuantityHint::Plenty => self.config.plenty_g,
                };
            }
        }

        self.config.default_amount_g
    }
}
