//! Ingredient identity matching.
//!
//! Maps a free-text ingredient line to a per-100 g nutrient profile in
//! three tiers, first match wins:
//!
//! 1. Canonical staple table (exact substring of the raw line, or any
//!    space-split fragment of the key contained in the lowercased line).
//! 2. Category keyword families (meat, poultry, seafood, vegetable, oil),
//!    compared against the lowercased line.
//! 3. A conservative generic profile for anything unrecognized.
//!
//! The function is total: every input, including the empty string, yields
//! a fully populated 22-key profile.

use crate::profile::NutrientProfile;
use crate::table::{IngredientCategory, CANONICAL, UNKNOWN_INGREDIENT};

/// Resolve an ingredient line to its per-100 g nutrient profile.
pub fn match_nutrients(line: &str) -> &'static NutrientProfile {
    let line_lower = line.to_lowercase();

    for (key, profile) in CANONICAL {
        let fragment_hit = key
            .split_whitespace()
            .any(|fragment| line_lower.contains(fragment));
        if line.contains(key) || fragment_hit {
            return profile;
        }
    }

    for category in IngredientCategory::PRIORITY {
        if category
            .keywords()
            .iter()
            .any(|kw| line_lower.contains(kw))
        {
            return category.profile();
        }
    }

    &UNKNOWN_INGREDIENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CHICKEN, FISH, GENERIC_VEGETABLE, OIL, PORK, RICE, SHRIMP};

    #[test]
    fn test_canonical_substring_match() {
        assert_eq!(match_nutrients("กุ้งสด 200 กรัม"), &SHRIMP);
        assert_eq!(match_nutrients("ข้าวสวย 1 ถ้วย"), &RICE);
        assert_eq!(match_nutrients("เนื้อหมูสับ"), &PORK);
    }

    #[test]
    fn test_canonical_first_match_wins() {
        // ข้าว appears before น้ำมัน in the canonical table.
        assert_eq!(match_nutrients("ข้าวผัดน้ำมัน"), &RICE);
    }

    #[test]
    fn test_category_meat_fallback() {
        // วัว (beef) is not a canonical key; the meat family resolves it.
        assert_eq!(match_nutrients("เนื้อวัวสไลซ์"), &PORK);
    }

    #[test]
    fn test_category_poultry_fallback() {
        // เป็ด (duck) resolves through the poultry family.
        assert_eq!(match_nutrients("เป็ดย่าง"), &CHICKEN);
    }

    #[test]
    fn test_category_seafood_fallback() {
        // ปู (crab) and หอย (shellfish) resolve to the fish profile.
        assert_eq!(match_nutrients("ปูม้านึ่ง"), &FISH);
        assert_eq!(match_nutrients("หอยแมลงภู่"), &FISH);
    }

    #[test]
    fn test_category_vegetable_fallback() {
        assert_eq!(match_nutrients("ผักบุ้ง 1 กำ"), &GENERIC_VEGETABLE);
        assert_eq!(match_nutrients("ใบโหระพา"), &GENERIC_VEGETABLE);
    }

    #[test]
    fn test_category_oil_fallback() {
        // มันเปลว (lard) hits the oil family via the มัน keyword.
        assert_eq!(match_nutrients("มันเปลว"), &OIL);
    }

    #[test]
    fn test_meat_outranks_oil() {
        // มันหมู contains both หมู (meat) and มัน (oil); meat is checked first.
        assert_eq!(match_nutrients("มันหมูเจียว"), &PORK);
    }

    #[test]
    fn test_unknown_ingredient_fallback() {
        let profile = match_nutrients("มะนาว 2 ลูก");
        assert_eq!(profile, &UNKNOWN_INGREDIENT);
        assert_eq!(profile.calories, 30.0);
    }

    #[test]
    fn test_empty_string_gets_unknown_profile() {
        assert_eq!(match_nutrients(""), &UNKNOWN_INGREDIENT);
    }

    #[test]
    fn test_always_fully_populated() {
        for line in ["", "กุ้ง", "เป็ด", "อะไรก็ไม่รู้", "xyz 123"] {
            let profile = match_nutrients(line);
            assert_eq!(profile.values().len(), 22);
            assert!(profile.values().iter().all(|v| *v >= 0.0));
        }
    }
}
