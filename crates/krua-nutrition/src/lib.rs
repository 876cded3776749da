//! Krua nutrition crate - heuristic ingredient-to-nutrition estimation.
//!
//! Parses free-text ingredient lines into gram amounts, matches each line
//! to a per-100 g nutrient profile from a small heuristic table, and
//! aggregates per-recipe totals. Every function here is total: unknown
//! ingredients and unparseable amounts fall back to conservative defaults,
//! never errors.

pub mod aggregate;
pub mod matcher;
pub mod profile;
pub mod quantity;
pub mod table;

pub use aggregate::{NutritionEstimator, ParsedIngredientLine};
pub use matcher::match_nutrients;
pub use profile::{NutrientProfile, NutritionTotals};
pub use quantity::QuantityEstimator;
