use crate::models::FoodItem;
use crate::planner::constants::{MAX_SERVING_GRAMS, MIN_SERVING_GRAMS};

/// Pivot magnitude below which a normal-equation system is treated as singular.
const SINGULAR_EPS: f64 = 1e-12;

/// Gram amounts for a candidate set, before and after the serving clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct PortionSolution {
    /// Clamped grams, one per food, in input order.
    pub grams: Vec<f64>,
    /// Non-negative least-squares grams before clamping.
    pub raw_grams: Vec<f64>,
}

impl PortionSolution {
    /// Number of servings the clamp raised to the minimum.
    pub fn floored(&self) -> usize {
        self.raw_grams
            .iter()
            .zip(&self.grams)
            .filter(|(raw, clamped)| *clamped > *raw)
            .count()
    }
}

/// Fits gram amounts to a calorie and protein target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortionSolver {
    pub min_grams: f64,
    pub max_grams: f64,
}

impl Default for PortionSolver {
    fn default() -> Self {
        Self {
            min_grams: MIN_SERVING_GRAMS,
            max_grams: MAX_SERVING_GRAMS,
        }
    }
}

impl PortionSolver {
    pub fn new(min_grams: f64, max_grams: f64) -> Self {
        Self {
            min_grams,
            max_grams,
        }
    }

    /// Solve the two-row system (calories, protein) for non-negative grams and
    /// clamp each amount into the serving range.
    ///
    /// The clamped result is not checked against the targets again.
    pub fn solve(
        &self,
        foods: &[&FoodItem],
        calorie_target: f64,
        protein_target: f64,
    ) -> PortionSolution {
        let a = vec![
            foods.iter().map(|f| f.calories / 100.0).collect::<Vec<_>>(),
            foods.iter().map(|f| f.protein_g / 100.0).collect::<Vec<_>>(),
        ];
        let b = [finite_or_zero(calorie_target), finite_or_zero(protein_target)];

        let raw_grams = nnls(&a, &b);
        let grams = raw_grams
            .iter()
            .map(|g| g.clamp(self.min_grams, self.max_grams))
            .collect();

        PortionSolution { grams, raw_grams }
    }
}

/// Clamped grams for `foods` using the default serving range.
pub fn solve_portions(foods: &[&FoodItem], calorie_target: f64, protein_target: f64) -> Vec<f64> {
    PortionSolver::default()
        .solve(foods, calorie_target, protein_target)
        .grams
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Non-negative least squares: minimize `||A x - b||²` subject to `x >= 0`.
///
/// Lawson-Hanson active-set method. `a` is row-major with `b.len()` rows.
/// Degenerate systems (e.g. all-zero coefficients) yield zeros.
pub fn nnls(a: &[Vec<f64>], b: &[f64]) -> Vec<f64> {
    let n = a.first().map(Vec::len).unwrap_or(0);
    let mut x = vec![0.0; n];
    if n == 0 {
        return x;
    }

    let scale = a
        .iter()
        .flatten()
        .chain(b)
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let tol = 1e-10 * (1.0 + scale * scale);

    let mut passive = vec![false; n];
    let max_iter = 3 * n + 10;
    let mut iterations = 0;

    loop {
        let w = gradient(a, b, &x);
        let entering = (0..n)
            .filter(|&j| !passive[j] && w[j] > tol)
            .max_by(|&i, &j| w[i].partial_cmp(&w[j]).unwrap_or(std::cmp::Ordering::Equal));

        let Some(j) = entering else {
            break;
        };
        passive[j] = true;

        loop {
            iterations += 1;
            if iterations > max_iter {
                return x;
            }

            let cols: Vec<usize> = (0..n).filter(|&c| passive[c]).collect();
            let Some(z) = least_squares(a, b, &cols) else {
                return x;
            };

            if z.iter().all(|&v| v > 0.0) {
                for (k, &c) in cols.iter().enumerate() {
                    x[c] = z[k];
                }
                break;
            }

            // Step toward z until the first passive variable hits zero.
            let mut alpha = f64::INFINITY;
            for (k, &c) in cols.iter().enumerate() {
                if z[k] <= 0.0 {
                    let denom = x[c] - z[k];
                    let ratio = if denom > 0.0 { x[c] / denom } else { 0.0 };
                    alpha = alpha.min(ratio);
                }
            }

            for (k, &c) in cols.iter().enumerate() {
                x[c] += alpha * (z[k] - x[c]);
                if x[c] <= SINGULAR_EPS {
                    x[c] = 0.0;
                    passive[c] = false;
                }
            }
        }
    }

    x
}

/// `Aᵀ (b - A x)`.
fn gradient(a: &[Vec<f64>], b: &[f64], x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut w = vec![0.0; n];
    for (row, &target) in a.iter().zip(b) {
        let fitted: f64 = row.iter().zip(x).map(|(coef, v)| coef * v).sum();
        let residual = target - fitted;
        for (wj, coef) in w.iter_mut().zip(row) {
            *wj += coef * residual;
        }
    }
    w
}

/// Unconstrained least squares restricted to `cols`, via the normal equations.
///
/// Returns `None` when the restricted system is singular.
fn least_squares(a: &[Vec<f64>], b: &[f64], cols: &[usize]) -> Option<Vec<f64>> {
    let k = cols.len();
    let mut g = vec![vec![0.0; k + 1]; k];

    for (r, &ci) in cols.iter().enumerate() {
        for (c, &cj) in cols.iter().enumerate() {
            g[r][c] = a.iter().map(|row| row[ci] * row[cj]).sum();
        }
        g[r][k] = a.iter().zip(b).map(|(row, t)| row[ci] * t).sum();
    }

    let diag_max = (0..k).map(|i| g[i][i].abs()).fold(0.0_f64, f64::max);
    let eps = SINGULAR_EPS * diag_max.max(1.0);

    // Gaussian elimination with partial pivoting on the augmented matrix.
    for col in 0..k {
        let pivot = (col..k).max_by(|&i, &j| {
            g[i][col]
                .abs()
                .partial_cmp(&g[j][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if g[pivot][col].abs() <= eps {
            return None;
        }
        g.swap(col, pivot);

        for row in (col + 1)..k {
            let factor = g[row][col] / g[col][col];
            for c in col..=k {
                g[row][c] -= factor * g[col][c];
            }
        }
    }

    let mut z = vec![0.0; k];
    for row in (0..k).rev() {
        let tail: f64 = ((row + 1)..k).map(|c| g[row][c] * z[c]).sum();
        z[row] = (g[row][k] - tail) / g[row][row];
    }
    Some(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < tol, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_single_food_exact() {
        let chicken = FoodItem::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6);
        let solution = PortionSolver::default().solve(&[&chicken], 330.0, 62.0);
        assert_close(&solution.raw_grams, &[200.0], 1e-6);
        assert_close(&solution.grams, &[200.0], 1e-6);
    }

    #[test]
    fn test_two_foods_exact() {
        let oats = FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9);
        let chicken = FoodItem::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6);
        let grams = solve_portions(&[&oats, &chicken], 636.5, 63.4);
        assert_close(&grams, &[100.0, 150.0], 1e-6);
    }

    #[test]
    fn test_negative_component_pinned_at_zero() {
        let a = FoodItem::new("No Protein", 100.0, 0.0, 25.0, 0.0);
        let b = FoodItem::new("Protein", 100.0, 10.0, 10.0, 0.0);
        let solution = PortionSolver::default().solve(&[&a, &b], 100.0, 20.0);

        assert_eq!(solution.raw_grams[0], 0.0);
        assert!((solution.raw_grams[1] - 102.0 / 1.01).abs() < 1e-6);
        assert_eq!(solution.grams[0], MIN_SERVING_GRAMS);
        assert_eq!(solution.floored(), 1);
    }

    #[test]
    fn test_underdetermined_three_foods_hits_targets() {
        let oats = FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9);
        let egg = FoodItem::new("Boiled Egg", 155.0, 13.0, 1.1, 11.0);
        let yogurt = FoodItem::new("Yogurt", 61.0, 3.5, 4.7, 3.3);
        let raw = nnls(
            &[
                vec![3.89, 1.55, 0.61],
                vec![0.169, 0.13, 0.035],
            ],
            &[540.0, 40.0],
        );
        let cal: f64 = [&oats, &egg, &yogurt]
            .iter()
            .zip(&raw)
            .map(|(f, g)| f.calories * g / 100.0)
            .sum();
        let pro: f64 = [&oats, &egg, &yogurt]
            .iter()
            .zip(&raw)
            .map(|(f, g)| f.protein_g * g / 100.0)
            .sum();
        assert!(raw.iter().all(|g| *g >= 0.0));
        assert!((cal - 540.0).abs() < 1e-6);
        assert!((pro - 40.0).abs() < 1e-6);
    }

    #[test]
    fn test_all_zero_coefficients_floor() {
        let water = FoodItem::new("Detox Water", 0.0, 0.0, 0.0, 0.0);
        let tea = FoodItem::new("Green Tea", 0.0, 0.0, 0.0, 0.0);
        let solution = PortionSolver::default().solve(&[&water, &tea], 500.0, 30.0);
        assert_eq!(solution.raw_grams, vec![0.0, 0.0]);
        assert_eq!(solution.grams, vec![MIN_SERVING_GRAMS, MIN_SERVING_GRAMS]);
        assert_eq!(solution.floored(), 2);
    }

    #[test]
    fn test_large_target_capped() {
        let tea = FoodItem::new("Green Tea", 1.0, 0.0, 0.2, 0.0);
        let grams = solve_portions(&[&tea], 900.0, 0.0);
        assert_eq!(grams, vec![MAX_SERVING_GRAMS]);
    }

    #[test]
    fn test_empty_foods() {
        assert!(solve_portions(&[], 500.0, 30.0).is_empty());
    }

    #[test]
    fn test_custom_range() {
        let chicken = FoodItem::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6);
        let grams = PortionSolver::new(10.0, 100.0)
            .solve(&[&chicken], 330.0, 62.0)
            .grams;
        assert_eq!(grams, vec![100.0]);
    }
}
