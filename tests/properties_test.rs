use proptest::prelude::*;

use nutri_plan_rs::models::{FoodItem, MacroTargets, MealSlot};
use nutri_plan_rs::planner::{
    cosine_similarity, rank, PortionSolver, RotationState, MAX_SERVING_GRAMS, MIN_SERVING_GRAMS,
};

fn macro_vector() -> impl Strategy<Value = [f64; 3]> {
    [0.0..100.0_f64, 0.0..100.0_f64, 0.0..100.0_f64]
}

fn food(index: usize, calories: f64, macros: [f64; 3]) -> FoodItem {
    FoodItem::new(&format!("food {}", index), calories, macros[0], macros[1], macros[2])
}

fn foods() -> impl Strategy<Value = Vec<FoodItem>> {
    prop::collection::vec((0.0..900.0_f64, macro_vector()), 1..8).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (cal, macros))| food(i, cal, macros))
            .collect()
    })
}

proptest! {
    #[test]
    fn cosine_is_bounded(a in macro_vector(), b in macro_vector()) {
        let s = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&s));
    }

    #[test]
    fn cosine_is_zero_for_zero_vectors(a in macro_vector()) {
        prop_assert_eq!(cosine_similarity(&a, &[0.0; 3]), 0.0);
        prop_assert_eq!(cosine_similarity(&[0.0; 3], &a), 0.0);
    }

    #[test]
    fn ranking_ignores_target_scale(
        pool in foods(),
        target in macro_vector(),
        factor in 0.5..20.0_f64,
    ) {
        let refs: Vec<&FoodItem> = pool.iter().collect();
        let base = MacroTargets { protein_g: target[0], carbs_g: target[1], fat_g: target[2] };
        let scaled = base.scaled(factor);

        // Scaling can perturb scores by an ulp, so compare score-sorted similarities.
        let base_ranked = rank(&refs, &base, refs.len());
        let scaled_ranked = rank(&refs, &scaled, refs.len());
        let base_scores: Vec<f64> = base_ranked
            .iter()
            .map(|f| cosine_similarity(&f.macro_vector(), &base.as_vector()))
            .collect();
        let scaled_scores: Vec<f64> = scaled_ranked
            .iter()
            .map(|f| cosine_similarity(&f.macro_vector(), &base.as_vector()))
            .collect();

        prop_assert_eq!(base_ranked.len(), scaled_ranked.len());
        for (x, y) in base_scores.iter().zip(&scaled_scores) {
            prop_assert!((x - y).abs() < 1e-9);
        }
        prop_assert_eq!(rank(&refs, &base, 3).len(), refs.len().min(3));
    }

    #[test]
    fn portions_stay_in_serving_range(
        pool in foods(),
        calorie_target in 0.0..5000.0_f64,
        protein_target in 0.0..300.0_f64,
    ) {
        let refs: Vec<&FoodItem> = pool.iter().collect();
        let solution = PortionSolver::default().solve(&refs, calorie_target, protein_target);

        prop_assert_eq!(solution.grams.len(), refs.len());
        for g in &solution.grams {
            prop_assert!(*g >= MIN_SERVING_GRAMS && *g <= MAX_SERVING_GRAMS);
        }
        for g in &solution.raw_grams {
            prop_assert!(*g >= 0.0 && g.is_finite());
        }
    }

    #[test]
    fn rotation_is_bounded_fifo(cooldown in 0usize..5, count in 0usize..12) {
        let mut rotation = RotationState::new(cooldown);
        for i in 0..count {
            rotation.record(MealSlot::Breakfast, &format!("food {}", i));
        }

        let recent: Vec<String> = rotation.recent(MealSlot::Breakfast).map(str::to_string).collect();
        let kept = count.min(cooldown);
        let expected: Vec<String> = (count - kept..count).map(|i| format!("food {}", i)).collect();
        prop_assert_eq!(recent, expected);
    }
}
