use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::catalog::{CatalogFilter, FoodCatalog};
use crate::error::{PlanError, Result};
use crate::models::{
    DayMeals, DayPlan, FoodItem, MacroTargets, MealLine, MealSlot, UserProfile, WeeklyPlan,
};
use crate::planner::config::{MacroSplit, MealSplit, PlanConfig};
use crate::planner::constants::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use crate::planner::portions::PortionSolver;
use crate::planner::ranking::rank;
use crate::planner::rotation::RotationState;
use crate::predictor::CalorieModel;

/// Daily macro gram targets for `calories` under `split`.
pub fn daily_macro_targets(calories: f64, split: &MacroSplit) -> MacroTargets {
    MacroTargets {
        protein_g: calories * split.protein / KCAL_PER_GRAM_PROTEIN,
        carbs_g: calories * split.carbs / KCAL_PER_GRAM_CARBS,
        fat_g: calories * split.fat / KCAL_PER_GRAM_FAT,
    }
}

/// Builds multi-day plans from a shared catalog.
///
/// The catalog, model and filter are borrowed read-only; every call to
/// [`PlanAssembler::generate`] starts from an empty [`RotationState`].
pub struct PlanAssembler<'a> {
    catalog: &'a FoodCatalog,
    model: &'a dyn CalorieModel,
    filter: &'a dyn CatalogFilter,
    config: PlanConfig,
    solver: PortionSolver,
    pool_keys: [HashSet<String>; 3],
}

impl<'a> PlanAssembler<'a> {
    /// Create an assembler; the config is validated here.
    pub fn new(
        catalog: &'a FoodCatalog,
        model: &'a dyn CalorieModel,
        filter: &'a dyn CatalogFilter,
        config: PlanConfig,
    ) -> Result<Self> {
        let config = config.normalized().validate()?;
        let solver = PortionSolver::new(config.min_grams, config.max_grams);
        let pool_keys = MealSlot::ALL.map(|slot| config.pools.key_set(slot));

        Ok(Self {
            catalog,
            model,
            filter,
            config,
            solver,
            pool_keys,
        })
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Generate a complete plan for `profile`, or fail without a partial plan.
    pub fn generate(&self, profile: &UserProfile) -> Result<WeeklyPlan> {
        let rotation = RotationState::new(self.config.cooldown);
        self.generate_with_rotation(profile, rotation)
            .map(|(plan, _)| plan)
    }

    /// Generate a plan starting from `rotation`, returning the final rotation
    /// state alongside the plan.
    pub fn generate_with_rotation(
        &self,
        profile: &UserProfile,
        mut rotation: RotationState,
    ) -> Result<(WeeklyPlan, RotationState)> {
        let (macro_split, meal_split) = self.config.splits_for(&profile.target_goal)?;

        let mut days = Vec::new();
        for day in 1..=self.config.days {
            let plan = self.plan_day(day, profile, &macro_split, &meal_split, &mut rotation)?;
            days.push(plan);
        }

        Ok((WeeklyPlan::from_days(days), rotation))
    }

    /// Plan a single day, updating `rotation` with every food served.
    pub fn plan_day(
        &self,
        day: usize,
        profile: &UserProfile,
        macro_split: &MacroSplit,
        meal_split: &MealSplit,
        rotation: &mut RotationState,
    ) -> Result<DayPlan> {
        let calories = self.predict_calories(profile)?;
        let daily_targets = daily_macro_targets(calories, macro_split);
        let filtered = self.filter.filter(self.catalog, profile);

        debug!(
            "Day {}: {:.1} kcal, {} of {} foods pass the filter",
            day,
            calories,
            filtered.len(),
            self.catalog.len()
        );

        let mut meals = DayMeals::default();
        for slot in MealSlot::ALL {
            let share = meal_split.share(slot);
            let lines = self.fill_slot(
                day,
                slot,
                &filtered,
                &daily_targets.scaled(share),
                calories * share,
                rotation,
            );
            meals.set(slot, lines);
        }

        info!("Planned day {} ({:.1} kcal predicted)", day, calories);
        Ok(DayPlan::new(day, calories, daily_targets, meals))
    }

    fn predict_calories(&self, profile: &UserProfile) -> Result<f64> {
        let calories = self.model.predict(profile).map_err(|e| match e {
            PlanError::UpstreamModel(_) => e,
            other => PlanError::UpstreamModel(other.to_string()),
        })?;

        if !calories.is_finite() || calories < 0.0 {
            return Err(PlanError::UpstreamModel(format!(
                "invalid calorie prediction {}",
                calories
            )));
        }
        Ok(calories)
    }

    /// Foods eligible for `slot`, falling back when filtering leaves none.
    ///
    /// Order of preference: filtered slot pool, unfiltered slot pool, filtered
    /// catalog, whole catalog.
    fn slot_pool(
        &self,
        day: usize,
        slot: MealSlot,
        filtered: &[&'a FoodItem],
    ) -> Vec<&'a FoodItem> {
        let keys = &self.pool_keys[slot.index()];

        let pool: Vec<&FoodItem> = filtered
            .iter()
            .copied()
            .filter(|f| keys.contains(&f.key()))
            .collect();
        if !pool.is_empty() {
            return pool;
        }

        let pool: Vec<&FoodItem> = self
            .catalog
            .iter()
            .filter(|f| keys.contains(&f.key()))
            .collect();
        if !pool.is_empty() {
            warn!(
                "Day {} {}: every eligible food was filtered out, using the unfiltered pool",
                day, slot
            );
            return pool;
        }

        if !filtered.is_empty() {
            warn!("Day {} {}: no catalog food is eligible, using the filtered catalog", day, slot);
            return filtered.to_vec();
        }

        warn!("Day {} {}: filter removed every food, using the whole catalog", day, slot);
        self.catalog.all()
    }

    fn fill_slot(
        &self,
        day: usize,
        slot: MealSlot,
        filtered: &[&'a FoodItem],
        targets: &MacroTargets,
        calorie_target: f64,
        rotation: &mut RotationState,
    ) -> Vec<MealLine> {
        let pool = self.slot_pool(day, slot, filtered);

        let rotated = rotation.filter(&pool, slot);
        let candidates = if rotated.is_empty() {
            debug!("Day {} {}: rotation emptied the pool, ignoring it", day, slot);
            pool
        } else {
            rotated
        };

        let chosen = rank(&candidates, targets, self.config.top_n);
        if chosen.is_empty() {
            warn!("Day {} {}: no foods to serve", day, slot);
            return Vec::new();
        }

        let solution = self.solver.solve(&chosen, calorie_target, targets.protein_g);
        let floored = solution.floored();
        if floored > 0 {
            warn!(
                "Day {} {}: {} of {} servings raised to the {}g minimum",
                day,
                slot,
                floored,
                chosen.len(),
                self.solver.min_grams
            );
        }

        for food in &chosen {
            rotation.record(slot, &food.food_name);
        }

        let lines: Vec<MealLine> = chosen
            .iter()
            .zip(&solution.grams)
            .map(|(food, grams)| MealLine::new(food, *grams))
            .collect();

        debug!(
            "Day {} {}: {}",
            day,
            slot,
            lines
                .iter()
                .map(|l| format!("{} {}g", l.food_name, l.grams))
                .collect::<Vec<_>>()
                .join(", ")
        );
        lines
    }
}

/// Generate a plan in one call with an assembler built from the arguments.
pub fn generate_weekly_plan(
    profile: &UserProfile,
    catalog: &FoodCatalog,
    model: &dyn CalorieModel,
    filter: &dyn CatalogFilter,
    config: PlanConfig,
) -> Result<WeeklyPlan> {
    PlanAssembler::new(catalog, model, filter, config)?.generate(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NoFilter;
    use crate::predictor::FixedCalorieModel;

    fn profile(goal: &str) -> UserProfile {
        UserProfile {
            age: 28,
            weight_kg: 68.0,
            height_cm: 165.0,
            gender: "female".to_string(),
            activity_level: "lightly active".to_string(),
            target_goal: goal.to_string(),
            allergies: vec![],
            health_conditions: vec![],
        }
    }

    fn catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9),
            FoodItem::new("Boiled Egg", 155.0, 13.0, 1.1, 11.0),
            FoodItem::new("Yogurt", 61.0, 3.5, 4.7, 3.3),
            FoodItem::new("Brown Bread", 247.0, 13.0, 41.0, 3.4),
            FoodItem::new("Roti", 297.0, 9.8, 46.4, 7.5),
            FoodItem::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6),
            FoodItem::new("Cooked Lentils", 116.0, 9.0, 20.0, 0.4),
            FoodItem::new("Palak Paneer", 190.0, 8.0, 7.0, 14.0),
        ])
    }

    #[test]
    fn test_daily_macro_targets() {
        let split = MacroSplit {
            carbs: 0.35,
            protein: 0.40,
            fat: 0.25,
        };
        let t = daily_macro_targets(1800.0, &split);
        assert!((t.protein_g - 180.0).abs() < 1e-9);
        assert!((t.carbs_g - 157.5).abs() < 1e-9);
        assert!((t.fat_g - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_plan_day_fills_every_slot() {
        let catalog = catalog();
        let model = FixedCalorieModel(2000.0);
        let assembler =
            PlanAssembler::new(&catalog, &model, &NoFilter, PlanConfig::default()).unwrap();
        let (macro_split, meal_split) = assembler.config().splits_for("maintain").unwrap();
        let mut rotation = RotationState::default();

        let day = assembler
            .plan_day(1, &profile("maintain"), &macro_split, &meal_split, &mut rotation)
            .unwrap();

        assert_eq!(day.meals.breakfast.len(), 3);
        assert_eq!(day.meals.lunch.len(), 3);
        assert_eq!(day.meals.dinner.len(), 3);
        assert_eq!(rotation.recent(MealSlot::Lunch).count(), 2);
    }

    #[test]
    fn test_small_pool_serves_fewer_lines() {
        let catalog = catalog();
        let model = FixedCalorieModel(2000.0);
        let mut config = PlanConfig::default();
        config.top_n = 5;
        config.pools.breakfast = vec!["oats".to_string(), "yogurt".to_string()];

        let plan = generate_weekly_plan(&profile("maintain"), &catalog, &model, &NoFilter, config)
            .unwrap();
        assert_eq!(plan.day(1).unwrap().meals.breakfast.len(), 2);
    }

    #[test]
    fn test_negative_prediction_is_upstream_error() {
        let catalog = catalog();
        let model = FixedCalorieModel(-10.0);
        let err = generate_weekly_plan(
            &profile("maintain"),
            &catalog,
            &model,
            &NoFilter,
            PlanConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::UpstreamModel(_)));
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let catalog = catalog();
        let model = FixedCalorieModel(2000.0);
        let config = PlanConfig {
            days: 0,
            ..Default::default()
        };
        assert!(PlanAssembler::new(&catalog, &model, &NoFilter, config).is_err());
    }

    #[test]
    fn test_huge_day_count_rejected_before_planning() {
        let catalog = catalog();
        let model = FixedCalorieModel(2000.0);
        let config = PlanConfig {
            days: usize::MAX,
            ..Default::default()
        };
        let err = generate_weekly_plan(&profile("maintain"), &catalog, &model, &NoFilter, config)
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_catalog_gives_empty_meals() {
        let catalog = FoodCatalog::default();
        let model = FixedCalorieModel(2000.0);
        let plan = generate_weekly_plan(
            &profile("maintain"),
            &catalog,
            &model,
            &NoFilter,
            PlanConfig::default(),
        )
        .unwrap();
        assert_eq!(plan.len(), 7);
        assert!(plan.days().iter().all(|d| d.meals.total_calories() == 0.0));
    }
}
