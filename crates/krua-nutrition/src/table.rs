//! Heuristic lookup tables: per-100 g nutrient profiles for Thai staple
//! ingredients, category fallback rules, unit conversion factors, and
//! descriptive-quantity keywords.
//!
//! The tables are deliberately plain data, separate from the matching and
//! parsing algorithms, so the heuristics can be tuned and tested on their
//! own. Values are approximate reference figures, not clinical data.

use crate::profile::NutrientProfile;

// =============================================================================
// Canonical staple ingredients (keyed by Thai name, per 100 g)
// =============================================================================

/// ข้าว - cooked rice.
pub const RICE: NutrientProfile = NutrientProfile {
    calories: 130.0,
    protein: 2.7,
    fat: 0.3,
    carbs: 28.0,
    fiber: 0.4,
    vitamin_c: 0.0,
    calcium: 28.0,
    iron: 0.8,
    magnesium: 25.0,
    phosphorus: 115.0,
    potassium: 115.0,
    zinc: 1.1,
    sodium: 5.0,
    vitamin_b6: 0.164,
    vitamin_k: 0.1,
    vitamin_b1: 0.07,
    vitamin_b2: 0.049,
    vitamin_b3: 1.6,
    folate: 8.0,
    vitamin_a: 0.0,
    vitamin_b12: 0.0,
    vitamin_e: 0.11,
};

/// เนื้อหมู - pork.
pub const PORK: NutrientProfile = NutrientProfile {
    calories: 242.0,
    protein: 27.0,
    fat: 14.0,
    carbs: 0.0,
    fiber: 0.0,
    vitamin_c: 0.7,
    calcium: 19.0,
    iron: 0.9,
    magnesium: 24.0,
    phosphorus: 200.0,
    potassium: 423.0,
    zinc: 2.9,
    sodium: 62.0,
    vitamin_b6: 0.464,
    vitamin_k: 0.0,
    vitamin_b1: 0.658,
    vitamin_b2: 0.321,
    vitamin_b3: 4.99,
    folate: 2.0,
    vitamin_a: 2.0,
    vitamin_b12: 0.7,
    vitamin_e: 0.3,
};

/// ไก่ - chicken.
pub const CHICKEN: NutrientProfile = NutrientProfile {
    calories: 165.0,
    protein: 31.0,
    fat: 3.6,
    carbs: 0.0,
    fiber: 0.0,
    vitamin_c: 1.6,
    calcium: 15.0,
    iron: 1.3,
    magnesium: 25.0,
    phosphorus: 228.0,
    potassium: 256.0,
    zinc: 1.3,
    sodium: 70.0,
    vitamin_b6: 0.35,
    vitamin_k: 0.0,
    vitamin_b1: 0.063,
    vitamin_b2: 0.114,
    vitamin_b3: 9.91,
    folate: 6.0,
    vitamin_a: 48.0,
    vitamin_b12: 0.34,
    vitamin_e: 0.27,
};

/// กุ้ง - shrimp.
pub const SHRIMP: NutrientProfile = NutrientProfile {
    calories: 106.0,
    protein: 20.0,
    fat: 1.7,
    carbs: 0.9,
    fiber: 0.0,
    vitamin_c: 2.1,
    calcium: 70.0,
    iron: 0.5,
    magnesium: 37.0,
    phosphorus: 205.0,
    potassium: 259.0,
    zinc: 1.6,
    sodium: 111.0,
    vitamin_b6: 0.11,
    vitamin_k: 0.3,
    vitamin_b1: 0.04,
    vitamin_b2: 0.061,
    vitamin_b3: 2.85,
    folate: 18.0,
    vitamin_a: 102.0,
    vitamin_b12: 1.11,
    vitamin_e: 1.01,
};

/// ปลา - fish.
pub const FISH: NutrientProfile = NutrientProfile {
    calories: 206.0,
    protein: 22.0,
    fat: 12.0,
    carbs: 0.0,
    fiber: 0.0,
    vitamin_c: 0.9,
    calcium: 18.0,
    iron: 0.2,
    magnesium: 35.0,
    phosphorus: 217.0,
    potassium: 414.0,
    zinc: 0.4,
    sodium: 59.0,
    vitamin_b6: 0.468,
    vitamin_k: 0.0,
    vitamin_b1: 0.15,
    vitamin_b2: 0.155,
    vitamin_b3: 4.1,
    folate: 15.0,
    vitamin_a: 158.0,
    vitamin_b12: 4.45,
    vitamin_e: 0.7,
};

/// ไข่ - egg.
pub const EGG: NutrientProfile = NutrientProfile {
    calories: 155.0,
    protein: 13.0,
    fat: 11.0,
    carbs: 1.1,
    fiber: 0.0,
    vitamin_c: 0.0,
    calcium: 56.0,
    iron: 1.75,
    magnesium: 12.0,
    phosphorus: 198.0,
    potassium: 138.0,
    zinc: 1.29,
    sodium: 142.0,
    vitamin_b6: 0.17,
    vitamin_k: 0.3,
    vitamin_b1: 0.04,
    vitamin_b2: 0.457,
    vitamin_b3: 0.075,
    folate: 47.0,
    vitamin_a: 540.0,
    vitamin_b12: 0.89,
    vitamin_e: 1.05,
};

/// มะเขือเทศ - tomato.
pub const TOMATO: NutrientProfile = NutrientProfile {
    calories: 18.0,
    protein: 0.9,
    fat: 0.2,
    carbs: 3.9,
    fiber: 1.2,
    vitamin_c: 14.0,
    calcium: 10.0,
    iron: 0.3,
    magnesium: 11.0,
    phosphorus: 24.0,
    potassium: 237.0,
    zinc: 0.17,
    sodium: 5.0,
    vitamin_b6: 0.08,
    vitamin_k: 7.9,
    vitamin_b1: 0.037,
    vitamin_b2: 0.019,
    vitamin_b3: 0.594,
    folate: 15.0,
    vitamin_a: 833.0,
    vitamin_b12: 0.0,
    vitamin_e: 0.54,
};

/// หอมใหญ่ - onion.
pub const ONION: NutrientProfile = NutrientProfile {
    calories: 40.0,
    protein: 1.1,
    fat: 0.1,
    carbs: 9.3,
    fiber: 1.7,
    vitamin_c: 7.4,
    calcium: 23.0,
    iron: 0.21,
    magnesium: 10.0,
    phosphorus: 29.0,
    potassium: 146.0,
    zinc: 0.17,
    sodium: 4.0,
    vitamin_b6: 0.12,
    vitamin_k: 0.4,
    vitamin_b1: 0.046,
    vitamin_b2: 0.027,
    vitamin_b3: 0.116,
    folate: 19.0,
    vitamin_a: 2.0,
    vitamin_b12: 0.0,
    vitamin_e: 0.02,
};

/// กระเทียม - garlic.
pub const GARLIC: NutrientProfile = NutrientProfile {
    calories: 149.0,
    protein: 6.4,
    fat: 0.5,
    carbs: 33.0,
    fiber: 2.1,
    vitamin_c: 31.2,
    calcium: 181.0,
    iron: 1.7,
    magnesium: 25.0,
    phosphorus: 153.0,
    potassium: 401.0,
    zinc: 1.16,
    sodium: 17.0,
    vitamin_b6: 1.235,
    vitamin_k: 1.7,
    vitamin_b1: 0.2,
    vitamin_b2: 0.11,
    vitamin_b3: 0.7,
    folate: 3.0,
    vitamin_a: 9.0,
    vitamin_b12: 0.0,
    vitamin_e: 0.08,
};

/// พริก - chili.
pub const CHILI: NutrientProfile = NutrientProfile {
    calories: 40.0,
    protein: 1.9,
    fat: 0.4,
    carbs: 7.3,
    fiber: 1.5,
    vitamin_c: 144.0,
    calcium: 18.0,
    iron: 1.0,
    magnesium: 25.0,
    phosphorus: 46.0,
    potassium: 340.0,
    zinc: 0.3,
    sodium: 7.0,
    vitamin_b6: 0.28,
    vitamin_k: 14.0,
    vitamin_b1: 0.09,
    vitamin_b2: 0.09,
    vitamin_b3: 0.95,
    folate: 23.0,
    vitamin_a: 952.0,
    vitamin_b12: 0.0,
    vitamin_e: 0.69,
};

/// น้ำมัน - cooking oil.
pub const OIL: NutrientProfile = NutrientProfile {
    calories: 884.0,
    protein: 0.0,
    fat: 100.0,
    carbs: 0.0,
    fiber: 0.0,
    vitamin_c: 0.0,
    calcium: 0.0,
    iron: 0.0,
    magnesium: 0.0,
    phosphorus: 0.0,
    potassium: 0.0,
    zinc: 0.0,
    sodium: 0.0,
    vitamin_b6: 0.0,
    vitamin_k: 60.0,
    vitamin_b1: 0.0,
    vitamin_b2: 0.0,
    vitamin_b3: 0.0,
    folate: 0.0,
    vitamin_a: 0.0,
    vitamin_b12: 0.0,
    vitamin_e: 14.35,
};

/// น้ำตาล - sugar.
pub const SUGAR: NutrientProfile = NutrientProfile {
    calories: 387.0,
    protein: 0.0,
    fat: 0.0,
    carbs: 100.0,
    fiber: 0.0,
    vitamin_c: 0.0,
    calcium: 1.0,
    iron: 0.01,
    magnesium: 0.0,
    phosphorus: 0.0,
    potassium: 2.0,
    zinc: 0.01,
    sodium: 1.0,
    vitamin_b6: 0.0,
    vitamin_k: 0.0,
    vitamin_b1: 0.0,
    vitamin_b2: 0.0,
    vitamin_b3: 0.0,
    folate: 0.0,
    vitamin_a: 0.0,
    vitamin_b12: 0.0,
    vitamin_e: 0.0,
};

/// เกลือ - salt.
pub const SALT: NutrientProfile = NutrientProfile {
    calories: 0.0,
    protein: 0.0,
    fat: 0.0,
    carbs: 0.0,
    fiber: 0.0,
    vitamin_c: 0.0,
    calcium: 24.0,
    iron: 0.33,
    magnesium: 290.0,
    phosphorus: 0.0,
    potassium: 8.0,
    zinc: 0.1,
    sodium: 38758.0,
    vitamin_b6: 0.0,
    vitamin_k: 0.0,
    vitamin_b1: 0.0,
    vitamin_b2: 0.0,
    vitamin_b3: 0.0,
    folate: 0.0,
    vitamin_a: 0.0,
    vitamin_b12: 0.0,
    vitamin_e: 0.0,
};

/// Generic leafy-vegetable profile for the category fallback tier.
pub const GENERIC_VEGETABLE: NutrientProfile = NutrientProfile {
    calories: 25.0,
    protein: 2.0,
    fat: 0.3,
    carbs: 4.0,
    fiber: 2.6,
    vitamin_c: 28.0,
    calcium: 40.0,
    iron: 1.5,
    magnesium: 12.0,
    phosphorus: 25.0,
    potassium: 194.0,
    zinc: 0.2,
    sodium: 12.0,
    vitamin_b6: 0.074,
    vitamin_k: 108.0,
    vitamin_b1: 0.03,
    vitamin_b2: 0.086,
    vitamin_b3: 0.425,
    folate: 62.0,
    vitamin_a: 469.0,
    vitamin_b12: 0.0,
    vitamin_e: 0.73,
};

/// Conservative low-calorie placeholder for unrecognized ingredients.
pub const UNKNOWN_INGREDIENT: NutrientProfile = NutrientProfile {
    calories: 30.0,
    protein: 1.0,
    fat: 0.5,
    carbs: 6.0,
    fiber: 1.0,
    vitamin_c: 5.0,
    calcium: 20.0,
    iron: 0.5,
    magnesium: 10.0,
    phosphorus: 15.0,
    potassium: 100.0,
    zinc: 0.1,
    sodium: 5.0,
    vitamin_b6: 0.05,
    vitamin_k: 2.0,
    vitamin_b1: 0.02,
    vitamin_b2: 0.03,
    vitamin_b3: 0.2,
    folate: 10.0,
    vitamin_a: 50.0,
    vitamin_b12: 0.0,
    vitamin_e: 0.2,
};

/// The canonical staple table, in lookup order. First match wins.
pub const CANONICAL: [(&str, &NutrientProfile); 13] = [
    ("ข้าว", &RICE),
    ("เนื้อหมู", &PORK),
    ("ไก่", &CHICKEN),
    ("กุ้ง", &SHRIMP),
    ("ปลา", &FISH),
    ("ไข่", &EGG),
    ("มะเขือเทศ", &TOMATO),
    ("หอมใหญ่", &ONION),
    ("กระเทียม", &GARLIC),
    ("พริก", &CHILI),
    ("น้ำมัน", &OIL),
    ("น้ำตาล", &SUGAR),
    ("เกลือ", &SALT),
];

// =============================================================================
// Category fallback
// =============================================================================

/// Keyword families for the category fallback tier of nutrient matching.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IngredientCategory {
    Meat,
    Poultry,
    Seafood,
    Vegetable,
    Oil,
}

impl IngredientCategory {
    /// Categories in match priority order. First match wins; a line that
    /// mentions both เนื้อ and ปลา resolves to `Meat`.
    pub const PRIORITY: [IngredientCategory; 5] = [
        IngredientCategory::Meat,
        IngredientCategory::Poultry,
        IngredientCategory::Seafood,
        IngredientCategory::Vegetable,
        IngredientCategory::Oil,
    ];

    /// Keywords that place an ingredient line into this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            IngredientCategory::Meat => &["เนื้อ", "หมู", "วัว"],
            IngredientCategory::Poultry => &["ไก่", "เป็ด"],
            IngredientCategory::Seafood => &["ปลา", "กุ้ง", "ปู", "หอย"],
            IngredientCategory::Vegetable => &["ผัก", "ใบ"],
            IngredientCategory::Oil => &["น้ำมัน", "มัน"],
        }
    }

    /// The representative per-100 g profile for this category.
    pub fn profile(&self) -> &'static NutrientProfile {
        match self {
            IngredientCategory::Meat => &PORK,
            IngredientCategory::Poultry => &CHICKEN,
            IngredientCategory::Seafood => &FISH,
            IngredientCategory::Vegetable => &GENERIC_VEGETABLE,
            IngredientCategory::Oil => &OIL,
        }
    }
}

// =============================================================================
// Units and descriptive quantities
// =============================================================================

/// Measurement units recognized in ingredient lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unit {
    Kilogram,
    Gram,
    Tablespoon,
    Teaspoon,
    Cup,
}

impl Unit {
    /// Units in match priority order. Kilogram precedes gram because the
    /// gram keyword ก. is a substring of กก.
    pub const PRIORITY: [Unit; 5] = [
        Unit::Kilogram,
        Unit::Gram,
        Unit::Tablespoon,
        Unit::Teaspoon,
        Unit::Cup,
    ];

    /// Keywords recognized for this unit (case-sensitive substring match).
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Unit::Kilogram => &["กิโลกรัม", "กก.", "kg"],
            Unit::Gram => &["กรัม", "ก.", "g"],
            Unit::Tablespoon => &["ช้อนโต๊ะ", "ช้อนใหญ่"],
            Unit::Teaspoon => &["ช้อนชา", "ช้อนเล็ก"],
            Unit::Cup => &["ถ้วย", "ถ้วยตวง"],
        }
    }

    /// Grams per one unit.
    pub fn grams_factor(&self) -> f64 {
        match self {
            Unit::Kilogram => 1000.0,
            Unit::Gram => 1.0,
            Unit::Tablespoon => 15.0,
            Unit::Teaspoon => 5.0,
            Unit::Cup => 200.0,
        }
    }
}

/// Descriptive quantity wording used when a line carries no usable number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuantityHint {
    /// เล็กน้อย / นิด - a little.
    Trace,
    /// กลาง / ปานกลาง - medium.
    Moderate,
    /// มาก / เยอะ - a lot.
    Plenty,
}

impl QuantityHint {
    /// Hints in match priority order.
    pub const PRIORITY: [QuantityHint; 3] = [
        QuantityHint::Trace,
        QuantityHint::Moderate,
        QuantityHint::Plenty,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            QuantityHint::Trace => &["เล็กน้อย", "นิด"],
            QuantityHint::Moderate => &["กลาง", "ปานกลาง"],
            QuantityHint::Plenty => &["มาก", "เยอะ"],
        }
    }
}
