use serde::{Deserialize, Serialize};

/// Nutrient quantities for a 100 g reference serving of one ingredient.
///
/// All 22 keys are always present and non-negative; the field names are a
/// stable caller-facing contract and must not be renamed. Unknown values
/// are zero, never absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub vitamin_c: f64,
    pub calcium: f64,
    pub iron: f64,
    pub magnesium: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub zinc: f64,
    pub sodium: f64,
    pub vitamin_b6: f64,
    pub vitamin_k: f64,
    pub vitamin_b1: f64,
    pub vitamin_b2: f64,
    pub vitamin_b3: f64,
    pub folate: f64,
    pub vitamin_a: f64,
    pub vitamin_b12: f64,
    pub vitamin_e: f64,
}

/// Absolute nutrient sums across a whole recipe. Same 22-key shape as
/// [`NutrientProfile`], but not normalized to 100 g.
pub type NutritionTotals = NutrientProfile;

impl NutrientProfile {
    /// The stable nutrient key names, in contract order.
    pub const KEYS: [&'static str; 22] = [
        "calories",
        "protein",
        "fat",
        "carbs",
        "fiber",
        "vitamin_c",
        "calcium",
        "iron",
        "magnesium",
        "phosphorus",
        "potassium",
        "zinc",
        "sodium",
        "vitamin_b6",
        "vitamin_k",
        "vitamin_b1",
        "vitamin_b2",
        "vitamin_b3",
        "folate",
        "vitamin_a",
        "vitamin_b12",
        "vitamin_e",
    ];

    /// All 22 values in contract order.
    pub fn values(&self) -> [f64; 22] {
        [
            self.calories,
            self.protein,
            self.fat,
            self.carbs,
            self.fiber,
            self.vitamin_c,
            self.calcium,
            self.iron,
            self.magnesium,
            self.phosphorus,
            self.potassium,
            self.zinc,
            self.sodium,
            self.vitamin_b6,
            self.vitamin_k,
            self.vitamin_b1,
            self.vitamin_b2,
            self.vitamin_b3,
            self.folate,
            self.vitamin_a,
            self.vitamin_b12,
            self.vitamin_e,
        ]
    }

    /// Add `other` scaled by `factor` into this record, element-wise.
    pub fn accumulate(&mut self, other: &NutrientProfile, factor: f64) {
        self.calories += other.calories * factor;
        self.protein += other.protein * factor;
        self.fat += other.fat * factor;
        self.carbs += other.carbs * factor;
        self.fiber += other.fiber * factor;
        self.vitamin_c += other.vitamin_c * factor;
        self.calcium += other.calcium * factor;
        self.iron += other.iron * factor;
        self.magnesium += other.magnesium * factor;
        self.phosphorus += other.phosphorus * factor;
        self.potassium += other.potassium * factor;
        self.zinc += other.zinc * factor;
        self.sodium += other.sodium * factor;
        self.vitamin_b6 += other.vitamin_b6 * factor;
        self.vitamin_k += other.vitamin_k * factor;
        self.vitamin_b1 += other.vitamin_b1 * factor;
        self.vitamin_b2 += other.vitamin_b2 * factor;
        self.vitamin_b3 += other.vitamin_b3 * factor;
        self.folate += other.folate * factor;
        self.vitamin_a += other.vitamin_a * factor;
        self.vitamin_b12 += other.vitamin_b12 * factor;
        self.vitamin_e += other.vitamin_e * factor;
    }

    /// A copy of this profile with every value scaled by `factor`.
    pub fn scaled(&self, factor: f64) -> NutrientProfile {
        let mut out = NutrientProfile::default();
        out.accumulate(self, factor);
        out
    }

    pub fn is_zero(&self) -> bool {
        self.values().iter().all(|v| *v == 0.0)
    }
}
