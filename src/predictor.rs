use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::UserProfile;

/// Predicts daily energy needs (kcal/day) from a user's attributes.
///
/// Implementations must be deterministic for identical profiles.
pub trait CalorieModel {
    fn predict(&self, profile: &UserProfile) -> Result<f64>;
}

/// Always predicts the same number of calories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCalorieModel(pub f64);

impl CalorieModel for FixedCalorieModel {
    fn predict(&self, _profile: &UserProfile) -> Result<f64> {
        Ok(self.0)
    }
}

/// Linear model over numeric attributes plus one-hot categorical offsets.
///
/// Categorical lookups are lowercase; a category the model has not seen
/// contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearCalorieModel {
    pub intercept: f64,
    pub age: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: HashMap<String, f64>,
    pub activity_level: HashMap<String, f64>,
    pub target_goal: HashMap<String, f64>,
}

impl LinearCalorieModel {
    /// Load model coefficients from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let model: Self = serde_json::from_str(&content)?;
        Ok(model)
    }

    fn offset(table: &HashMap<String, f64>, category: &str) -> f64 {
        table
            .get(&category.trim().to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }
}

impl CalorieModel for LinearCalorieModel {
    fn predict(&self, profile: &UserProfile) -> Result<f64> {
        let kcal = self.intercept
            + self.age * profile.age as f64
            + self.weight_kg * profile.weight_kg
            + self.height_cm * profile.height_cm
            + Self::offset(&self.gender, &profile.gender)
            + Self::offset(&self.activity_level, &profile.activity_level)
            + Self::offset(&self.target_goal, &profile.target_goal);

        if !kcal.is_finite() {
            return Err(PlanError::UpstreamModel(format!(
                "non-finite prediction {}",
                kcal
            )));
        }
        Ok(kcal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn profile() -> UserProfile {
        UserProfile {
            age: 30,
            weight_kg: 70.0,
            height_cm: 170.0,
            gender: "Female".to_string(),
            activity_level: "Very Active".to_string(),
            target_goal: "weight loss".to_string(),
            allergies: vec![],
            health_conditions: vec![],
        }
    }

    fn model() -> LinearCalorieModel {
        LinearCalorieModel {
            intercept: 100.0,
            age: -5.0,
            weight_kg: 10.0,
            height_cm: 6.25,
            gender: HashMap::from([("female".to_string(), -161.0)]),
            activity_level: HashMap::from([("very active".to_string(), 600.0)]),
            target_goal: HashMap::from([("weight loss".to_string(), -400.0)]),
        }
    }

    #[test]
    fn test_fixed_model() {
        assert_eq!(FixedCalorieModel(1800.0).predict(&profile()).unwrap(), 1800.0);
    }

    #[test]
    fn test_linear_model_prediction() {
        // 100 - 150 + 700 + 1062.5 - 161 + 600 - 400
        let kcal = model().predict(&profile()).unwrap();
        assert!((kcal - 1751.5).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_category_contributes_nothing() {
        let mut p = profile();
        p.gender = "unspecified".to_string();
        let kcal = model().predict(&p).unwrap();
        assert!((kcal - 1912.5).abs() < 1e-9);
    }

    #[test]
    fn test_linear_model_is_deterministic() {
        let m = model();
        assert_eq!(m.predict(&profile()).unwrap(), m.predict(&profile()).unwrap());
    }

    #[test]
    fn test_non_finite_prediction_is_upstream_error() {
        let mut m = model();
        m.intercept = f64::INFINITY;
        let err = m.predict(&profile()).unwrap_err();
        assert!(matches!(err, PlanError::UpstreamModel(_)));
    }

    #[test]
    fn test_from_json_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"intercept": 2000, "target_goal": {"weight gain": 300}}"#)
            .unwrap();

        let m = LinearCalorieModel::from_json_file(file.path()).unwrap();
        assert_eq!(m.predict(&profile()).unwrap(), 2000.0);
    }
}
