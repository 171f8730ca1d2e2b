use std::collections::HashMap;

use crate::models::FoodItem;

/// Read-only food catalog shared by every plan-generation call.
///
/// Foods keep their load order; lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog, collapsing duplicate names.
    ///
    /// The last occurrence of a name wins but keeps the position of the first.
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut catalog = Self::default();
        for food in foods {
            let key = food.key();
            match catalog.index.get(&key) {
                Some(&pos) => catalog.foods[pos] = food,
                None => {
                    catalog.index.insert(key, catalog.foods.len());
                    catalog.foods.push(food);
                }
            }
        }
        catalog
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&pos| &self.foods[pos])
    }

    /// All foods in load order.
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.foods.iter()
    }

    /// All foods as references, in load order.
    pub fn all(&self) -> Vec<&FoodItem> {
        self.foods.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_foods() -> Vec<FoodItem> {
        vec![
            FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9),
            FoodItem::new("Roti", 297.0, 9.8, 46.4, 7.5),
            FoodItem::new("OATS", 380.0, 13.0, 68.0, 6.5),
        ]
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = FoodCatalog::new(sample_foods());
        assert!(catalog.get("oats").is_some());
        assert!(catalog.get(" Roti ").is_some());
        assert!(catalog.get("nihari").is_none());
    }

    #[test]
    fn test_duplicates_last_wins_first_position() {
        let catalog = FoodCatalog::new(sample_foods());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.foods()[0].food_name, "OATS");
        assert_eq!(catalog.foods()[0].calories, 380.0);
        assert_eq!(catalog.foods()[1].food_name, "Roti");
    }
}
