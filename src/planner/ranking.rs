use std::cmp::Ordering;

use crate::models::{FoodItem, MacroTargets};

/// Cosine similarity between two vectors, or 0 when either has zero norm.
pub fn cosine_similarity(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Rank `pool` by macro-direction similarity to `target`, best first.
///
/// Equal scores keep their pool order. Returns at most `top_n` foods and an
/// empty vector for an empty pool.
pub fn rank<'a>(pool: &[&'a FoodItem], target: &MacroTargets, top_n: usize) -> Vec<&'a FoodItem> {
    let target = target.as_vector();

    let mut scored: Vec<(f64, &'a FoodItem)> = pool
        .iter()
        .map(|food| (cosine_similarity(&food.macro_vector(), &target), *food))
        .collect();

    // sort_by is stable, so ties stay in first-appearance order
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    scored.into_iter().take(top_n).map(|(_, food)| food).collect()
}
