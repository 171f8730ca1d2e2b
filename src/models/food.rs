use serde::{Deserialize, Deserializer, Serialize};

/// A catalog food with nutrient facts per 100g.
///
/// Missing or unusable nutrient values are read as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub food_name: String,

    #[serde(default, deserialize_with = "non_negative")]
    pub calories: f64,

    #[serde(default, deserialize_with = "non_negative")]
    pub protein_g: f64,

    #[serde(default, deserialize_with = "non_negative")]
    pub carbs_g: f64,

    #[serde(default, deserialize_with = "non_negative")]
    pub fat_g: f64,
}

/// Nutrients contained in a given gram amount of a food.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Nutrients {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl FoodItem {
    pub fn new(name: &str, calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            food_name: name.to_string(),
            calories: sanitize(calories),
            protein_g: sanitize(protein_g),
            carbs_g: sanitize(carbs_g),
            fat_g: sanitize(fat_g),
        }
    }

    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        self.food_name.trim().to_lowercase()
    }

    /// Macro vector in ranking order: (protein, carbs, fat).
    #[inline]
    pub fn macro_vector(&self) -> [f64; 3] {
        [self.protein_g, self.carbs_g, self.fat_g]
    }

    /// Nutrients served by `grams` of this food.
    pub fn nutrients_at(&self, grams: f64) -> Nutrients {
        let factor = grams / 100.0;
        Nutrients {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} C:{} F:{} per 100g",
            self.food_name, self.calories, self.protein_g, self.carbs_g, self.fat_g
        )
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Accepts numbers, numeric strings, empty strings and nulls; anything unusable becomes 0.
fn non_negative<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Missing(Option<()>),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().parse().unwrap_or(0.0),
        Raw::Missing(_) => 0.0,
    };
    Ok(sanitize(value))
}
