use serde::{Deserialize, Serialize};

/// The user attributes a plan is generated for.
///
/// Only the demographic and goal fields reach the calorie model; allergies and
/// health conditions are consumed by the catalog filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: String,
    pub activity_level: String,
    pub target_goal: String,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub health_conditions: Vec<String>,
}

impl UserProfile {
    /// Case-insensitive check for a health condition.
    pub fn has_condition(&self, condition: &str) -> bool {
        self.health_conditions
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(condition))
    }
}
