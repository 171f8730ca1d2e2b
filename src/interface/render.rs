use crate::catalog::FoodCatalog;
use crate::models::{DayPlan, MealSlot, WeeklyPlan};
use crate::planner::{MealSplit, PlanConfig};

/// Display a weekly plan as one table per day.
pub fn display_weekly_plan(plan: &WeeklyPlan, meal_split: Option<&MealSplit>) {
    if plan.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    for day in plan.days() {
        display_day(day, meal_split);
    }
}

fn display_day(day: &DayPlan, meal_split: Option<&MealSplit>) {
    let targets = &day.daily_macro_targets;

    println!();
    println!(
        "=== Day {} === {:.0} kcal | P {:.1}g  C {:.1}g  F {:.1}g",
        day.day, day.predicted_daily_calories, targets.protein_g, targets.carbs_g, targets.fat_g
    );

    let name_width = MealSlot::ALL
        .iter()
        .flat_map(|slot| day.meals.get(*slot))
        .map(|line| line.food_name.len())
        .max()
        .unwrap_or(10);

    for slot in MealSlot::ALL {
        let lines = day.meals.get(slot);
        let total_cal: f64 = lines.iter().map(|l| l.calories).sum();
        let total_pro: f64 = lines.iter().map(|l| l.protein_g).sum();

        let target_str = match meal_split {
            Some(split) => {
                let share = split.share(slot);
                format!(
                    " (target {:.0} kcal, {:.1}g protein)",
                    day.predicted_daily_calories * share,
                    targets.protein_g * share
                )
            }
            None => String::new(),
        };

        println!();
        println!(
            "  {} - {:.0} kcal, {:.1}g protein{}",
            slot, total_cal, total_pro, target_str
        );

        if lines.is_empty() {
            println!("    (nothing served)");
        }
        for line in lines {
            println!(
                "    {:<width$}  {:>6.1} g  {:>6.1} kcal | P {:>5.1}  C {:>5.1}  F {:>5.1}",
                line.food_name,
                line.grams,
                line.calories,
                line.protein_g,
                line.carbs_g,
                line.fat_g,
                width = name_width
            );
        }
    }
}

/// Display the catalog with the slots each food is eligible for.
pub fn display_food_list(catalog: &FoodCatalog, config: &PlanConfig) {
    if catalog.is_empty() {
        println!("Catalog: (none)");
        return;
    }

    let pools = MealSlot::ALL.map(|slot| config.pools.key_set(slot));

    println!();
    println!("=== Catalog ({} items) ===", catalog.len());
    println!();

    for food in catalog.iter() {
        let key = food.key();
        let slots: Vec<&str> = MealSlot::ALL
            .iter()
            .filter(|slot| pools[slot.index()].contains(&key))
            .map(|slot| slot.name())
            .collect();
        let slots = if slots.is_empty() {
            "-".to_string()
        } else {
            slots.join("/")
        };

        println!(
            "  {} - {} kcal, P:{} C:{} F:{} per 100g [{}]",
            food.food_name, food.calories, food.protein_g, food.carbs_g, food.fat_g, slots
        );
    }

    println!();
}

/// Display the split tables of a configuration.
pub fn display_config(config: &PlanConfig) {
    println!();
    println!(
        "Days: {}  Cooldown: {}  Candidates per meal: {}  Serving range: {}-{} g",
        config.days, config.cooldown, config.top_n, config.min_grams, config.max_grams
    );
    println!();
    println!(
        "{:<16} {:>6} {:>8} {:>6} | {:>9} {:>6} {:>7}",
        "goal", "carbs", "protein", "fat", "breakfast", "lunch", "dinner"
    );

    for goal in config.goals() {
        if let Ok((m, s)) = config.splits_for(goal) {
            println!(
                "{:<16} {:>6.2} {:>8.2} {:>6.2} | {:>9.2} {:>6.2} {:>7.2}",
                goal, m.carbs, m.protein, m.fat, s.breakfast, s.lunch, s.dinner
            );
        }
    }
    println!();
}
