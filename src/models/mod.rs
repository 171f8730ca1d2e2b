pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FoodItem, Nutrients};
pub use plan::{round1, DayMeals, DayPlan, MacroTargets, MealLine, MealSlot, WeeklyPlan};
pub use profile::UserProfile;
