use assert_float_eq::assert_f64_near;

use nutri_plan_rs::models::MealSlot;
use nutri_plan_rs::planner::{daily_macro_targets, PlanConfig, SPLIT_TOLERANCE};

#[test]
fn test_default_macro_splits_sum_to_one() {
    let config = PlanConfig::default();
    assert!(!config.goals().is_empty());

    for goal in config.goals() {
        let (macro_split, _) = config.splits_for(goal).unwrap();
        assert!(
            (macro_split.total() - 1.0).abs() <= SPLIT_TOLERANCE,
            "macro split for {} sums to {}",
            goal,
            macro_split.total()
        );
    }
}

#[test]
fn test_default_meal_splits_sum_to_one() {
    let config = PlanConfig::default();

    for goal in config.goals() {
        let (_, meal_split) = config.splits_for(goal).unwrap();
        let total: f64 = MealSlot::ALL.iter().map(|s| meal_split.share(*s)).sum();
        assert!(
            (total - 1.0).abs() <= SPLIT_TOLERANCE,
            "meal split for {} sums to {}",
            goal,
            total
        );
    }
}

#[test]
fn test_every_known_goal_has_both_tables() {
    let config = PlanConfig::default();
    for goal in ["weight loss", "weight gain", "maintain"] {
        assert!(config.splits_for(goal).is_ok(), "missing goal {}", goal);
    }
}

#[test]
fn test_weight_loss_breakfast_protein_target() {
    let config = PlanConfig::default();
    let (macro_split, meal_split) = config.splits_for("weight loss").unwrap();

    let daily = daily_macro_targets(1800.0, &macro_split);
    let breakfast = daily.scaled(meal_split.share(MealSlot::Breakfast));

    assert_f64_near!(daily.protein_g, 1800.0 * 0.40 / 4.0, 8);
    assert_f64_near!(breakfast.protein_g, 1800.0 * 0.40 / 4.0 * 0.30, 8);
}

#[test]
fn test_fat_uses_nine_kcal_per_gram() {
    let config = PlanConfig::default();
    let (macro_split, _) = config.splits_for("maintain").unwrap();
    let daily = daily_macro_targets(2700.0, &macro_split);

    assert!((daily.fat_g - 2700.0 * 0.25 / 9.0).abs() < 1e-9);
    assert!((daily.carbs_g - 2700.0 * 0.45 / 4.0).abs() < 1e-9);
}
