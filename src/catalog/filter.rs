use crate::catalog::FoodCatalog;
use crate::models::{FoodItem, UserProfile};

/// Sweet items excluded for diabetes.
pub const DIABETES_EXCLUSIONS: &[&str] = &[
    "halwa", "kheer", "mithai", "dessert", "juice", "milkshake", "soda", "sweet", "pancake",
    "cereal",
];

/// Fried and salty items excluded for hypertension.
pub const HYPERTENSION_EXCLUSIONS: &[&str] = &[
    "fried", "samosa", "pakora", "chips", "paratha", "biryani", "nihari", "haleem",
];

/// Narrows the catalog to the foods a profile may be served.
///
/// The result must be a subset of `catalog` in catalog order.
pub trait CatalogFilter {
    fn filter<'a>(&self, catalog: &'a FoodCatalog, profile: &UserProfile) -> Vec<&'a FoodItem>;
}

/// Passes the whole catalog through.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl CatalogFilter for NoFilter {
    fn filter<'a>(&self, catalog: &'a FoodCatalog, _profile: &UserProfile) -> Vec<&'a FoodItem> {
        catalog.all()
    }
}

/// Excludes foods by case-insensitive substring match on the food name.
///
/// Allergy terms come from the profile; each known health condition adds its
/// own keyword list.
#[derive(Debug, Clone)]
pub struct AllergyFilter {
    conditions: Vec<(String, Vec<String>)>,
}

impl Default for AllergyFilter {
    fn default() -> Self {
        Self::new()
            .with_condition("diabetes", DIABETES_EXCLUSIONS)
            .with_condition("hypertension", HYPERTENSION_EXCLUSIONS)
    }
}

impl AllergyFilter {
    /// A filter with no condition rules; only allergies apply.
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: &str, keywords: &[&str]) -> Self {
        self.conditions.push((
            condition.to_lowercase(),
            keywords.iter().map(|k| k.to_lowercase()).collect(),
        ));
        self
    }

    /// Every lowercase term that excludes a food for `profile`.
    pub fn exclusion_terms(&self, profile: &UserProfile) -> Vec<String> {
        let mut terms: Vec<String> = profile
            .allergies
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();

        for (condition, keywords) in &self.conditions {
            if profile.has_condition(condition) {
                terms.extend(keywords.iter().cloned());
            }
        }
        terms
    }
}

impl CatalogFilter for AllergyFilter {
    fn filter<'a>(&self, catalog: &'a FoodCatalog, profile: &UserProfile) -> Vec<&'a FoodItem> {
        let terms = self.exclusion_terms(profile);
        if terms.is_empty() {
            return catalog.all();
        }

        catalog
            .iter()
            .filter(|food| {
                let key = food.key();
                !terms.iter().any(|t| key.contains(t.as_str()))
            })
            .collect()
    }
}
