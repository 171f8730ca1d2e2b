use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::food::{FoodItem, Nutrients};

/// Round to one decimal place, as every emitted plan number is.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The three meal slots of a day, in fill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gram targets for protein, carbs and fat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroTargets {
    /// Vector in ranking order: (protein, carbs, fat).
    #[inline]
    pub fn as_vector(&self) -> [f64; 3] {
        [self.protein_g, self.carbs_g, self.fat_g]
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }

    fn rounded(&self) -> Self {
        Self {
            protein_g: round1(self.protein_g),
            carbs_g: round1(self.carbs_g),
            fat_g: round1(self.fat_g),
        }
    }
}

/// One food served in a meal, with nutrients at the served amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealLine {
    pub food_name: String,
    pub grams: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MealLine {
    /// Build a line for `grams` of `food`; all values are rounded to one decimal.
    pub fn new(food: &FoodItem, grams: f64) -> Self {
        let Nutrients {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        } = food.nutrients_at(grams);

        Self {
            food_name: food.food_name.clone(),
            grams: round1(grams),
            calories: round1(calories),
            protein_g: round1(protein_g),
            carbs_g: round1(carbs_g),
            fat_g: round1(fat_g),
        }
    }
}

/// Meals of one day keyed by slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayMeals {
    pub breakfast: Vec<MealLine>,
    pub lunch: Vec<MealLine>,
    pub dinner: Vec<MealLine>,
}

impl DayMeals {
    pub fn get(&self, slot: MealSlot) -> &[MealLine] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn set(&mut self, slot: MealSlot, lines: Vec<MealLine>) {
        match slot {
            MealSlot::Breakfast => self.breakfast = lines,
            MealSlot::Lunch => self.lunch = lines,
            MealSlot::Dinner => self.dinner = lines,
        }
    }

    /// Sum of calories over every line of the day.
    pub fn total_calories(&self) -> f64 {
        MealSlot::ALL
            .iter()
            .flat_map(|slot| self.get(*slot))
            .map(|line| line.calories)
            .sum()
    }
}

/// Plan for a single day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// 1-based day number.
    #[serde(skip)]
    pub day: usize,
    pub predicted_daily_calories: f64,
    pub daily_macro_targets: MacroTargets,
    pub meals: DayMeals,
}

impl DayPlan {
    pub fn new(
        day: usize,
        predicted_daily_calories: f64,
        daily_macro_targets: MacroTargets,
        meals: DayMeals,
    ) -> Self {
        Self {
            day,
            predicted_daily_calories: round1(predicted_daily_calories),
            daily_macro_targets: daily_macro_targets.rounded(),
            meals,
        }
    }

    /// Output key of this day, e.g. `day_3`.
    pub fn key(&self) -> String {
        format!("day_{}", self.day)
    }
}

/// An ordered, immutable multi-day plan.
///
/// Serializes as an object keyed `day_1 .. day_N` in day order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPlan {
    days: Vec<DayPlan>,
}

impl WeeklyPlan {
    pub(crate) fn from_days(days: Vec<DayPlan>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// Day by 1-based number.
    pub fn day(&self, day: usize) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Serialize for WeeklyPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.key(), day)?;
        }
        map.end()
    }
}
