pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod output;
pub mod planner;
pub mod predictor;

pub use catalog::{CatalogFilter, FoodCatalog};
pub use error::{PlanError, Result};
pub use models::{DayPlan, FoodItem, MealLine, UserProfile, WeeklyPlan};
pub use planner::{generate_weekly_plan, PlanAssembler, PlanConfig};
pub use predictor::CalorieModel;
