//! Per-recipe nutrition aggregation.
//!
//! Splits a recipe's ingredient text into lines, estimates a gram amount
//! and nutrient profile per line, and sums the scaled profiles into one
//! totals record. Totals are not clamped: a line parsed as "1000 kg" will
//! dominate the sum, which is an accepted property of the heuristic.

use krua_core::config::NutritionConfig;
use regex::Regex;
use tracing::debug;

use crate::matcher::match_nutrients;
use crate::profile::{NutrientProfile, NutritionTotals};
use crate::quantity::QuantityEstimator;

/// One parsed ingredient line, ephemeral within a single aggregation call.
#[derive(Clone, Debug)]
pub struct ParsedIngredientLine {
    /// The line after bullet stripping.
    pub raw: String,
    /// Estimated amount in grams.
    pub amount_g: f64,
    /// Matched per-100 g profile.
    pub profile: &'static NutrientProfile,
}

/// Nutrition estimator over free-text ingredient lists.
pub struct NutritionEstimator {
    quantity: QuantityEstimator,
    bullet_re: Regex,
}

impl Default for NutritionEstimator {
    fn default() -> Self {
        Self::new(NutritionConfig::default())
    }
}

impl NutritionEstimator {
    pub fn new(config: NutritionConfig) -> Self {
        Self {
            quantity: QuantityEstimator::new(config),
            bullet_re: Regex::new(r"^[-•*]\s*").expect("valid bullet regex"),
        }
    }

    /// Parse every non-blank line of an ingredient text.
    ///
    /// Strips one leading bullet marker per line. Each returned line has a
    /// gram estimate and a fully populated profile.
    pub fn parse_lines(&self, ingredient_text: &str) -> Vec<ParsedIngredientLine> {
        ingredient_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let clean = self.bullet_re.replace(line, "").into_owned();
                let amount_g = self.quantity.estimate(&clean);
                let profile = match_nutrients(&clean);
                ParsedIngredientLine {
                    raw: clean,
                    amount_g,
                    profile,
                }
            })
            .collect()
    }

    /// Aggregate an ingredient text into absolute nutrient totals.
    ///
    /// Empty input yields an all-zero record; this never fails.
    pub fn aggregate(&self, ingredient_text: &str) -> NutritionTotals {
        let mut totals = NutritionTotals::default();
        let lines = self.parse_lines(ingredient_text);
        for line in &lines {
            totals.accumulate(line.profile, line.amount_g / 100.0);
        }
        debug!(
            lines = lines.len(),
            calories = totals.calories,
            "Ingredient text aggregated"
        );
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> NutritionEstimator {
        NutritionEstimator::default()
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        assert!(estimator().aggregate("").is_zero());
        assert!(estimator().aggregate("\n\n   \n").is_zero());
    }

    #[test]
    fn test_bullet_markers_stripped() {
        let est = estimator();
        let lines = est.parse_lines("- กุ้ง 100 กรัม\n• ข้าว 100 กรัม\n* ไข่ 100 กรัม");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].raw, "กุ้ง 100 กรัม");
        assert_eq!(lines[1].raw, "ข้าว 100 กรัม");
        assert_eq!(lines[2].raw, "ไข่ 100 กรัม");
    }

    #[test]
    fn test_single_line_scaling() {
        // 200 g of shrimp = 2x the per-100 g profile.
        let totals = estimator().aggregate("กุ้งสด 200 กรัม");
        assert!((totals.calories - 212.0).abs() < 1e-9);
        assert!((totals.protein - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_fixture_shrimp_and_lime() {
        // Line 1: กุ้งสด 200 กรัม -> shrimp at 2.0x (106 kcal/100 g).
        // Line 2: มะนาว 2 ลูก -> no unit keyword, 20 g default of the
        // unknown-ingredient profile (30 kcal/100 g).
        // Expected calories: 2.0 * 106 + 0.2 * 30 = 218.
        let totals = estimator().aggregate("- กุ้งสด 200 กรัม\n- มะนาว 2 ลูก");
        assert!((totals.calories - 218.0).abs() < 1e-9);
        // Sodium: 2.0 * 111 + 0.2 * 5 = 223.
        assert!((totals.sodium - 223.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregation_is_linear() {
        let est = estimator();
        let combined = est.aggregate("กุ้ง 100 กรัม\nข้าว 1 ถ้วย");
        let mut summed = est.aggregate("กุ้ง 100 กรัม");
        let second = est.aggregate("ข้าว 1 ถ้วย");
        summed.accumulate(&second, 1.0);

        for (a, b) in combined.values().iter().zip(summed.values().iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_totals_not_clamped() {
        // A pathological "1000 kg" line dominates the totals; no clamping.
        let totals = estimator().aggregate("หมู 1000 กิโลกรัม");
        assert!(totals.calories > 1_000_000.0);
    }

    #[test]
    fn test_parse_lines_skips_blanks() {
        let lines = estimator().parse_lines("กุ้ง 100 กรัม\n\n   \nข้าว 1 ถ้วย");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_all_keys_populated_in_totals() {
        let totals = estimator().aggregate("- กุ้งสด 200 กรัม\n- ผักบุ้ง เยอะ");
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 22);
    }
}
