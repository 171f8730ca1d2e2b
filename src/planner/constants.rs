/// Energy per gram of protein (kcal).
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy per gram of carbohydrate (kcal).
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy per gram of fat (kcal).
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Smallest serving the portion solver will emit (grams).
pub const MIN_SERVING_GRAMS: f64 = 60.0;

/// Largest serving the portion solver will emit (grams).
pub const MAX_SERVING_GRAMS: f64 = 350.0;

/// Number of recent foods per slot suppressed from re-selection.
pub const DEFAULT_COOLDOWN: usize = 2;

/// Candidates picked per meal slot.
pub const DEFAULT_TOP_N: usize = 3;

/// Days in a generated plan.
pub const DEFAULT_DAYS: usize = 7;

/// Longest plan a single call will generate.
pub const MAX_PLAN_DAYS: usize = 366;

/// Tolerance for split ratios summing to one.
pub const SPLIT_TOLERANCE: f64 = 1e-6;

/// Minimum Jaro-Winkler score for suggesting a known goal.
pub const GOAL_SUGGESTION_THRESHOLD: f64 = 0.8;

// ─────────────────────────────────────────────────────────────────────────────
// Default split tables
// ─────────────────────────────────────────────────────────────────────────────

/// (goal, carb, protein, fat) fractions of daily calories.
pub const DEFAULT_MACRO_SPLITS: [(&str, f64, f64, f64); 3] = [
    ("weight loss", 0.35, 0.40, 0.25),
    ("weight gain", 0.50, 0.30, 0.20),
    ("maintain", 0.45, 0.30, 0.25),
];

/// (goal, breakfast, lunch, dinner) fractions of daily targets.
pub const DEFAULT_MEAL_SPLITS: [(&str, f64, f64, f64); 3] = [
    ("weight loss", 0.30, 0.40, 0.30),
    ("weight gain", 0.30, 0.45, 0.25),
    ("maintain", 0.30, 0.40, 0.30),
];

// ─────────────────────────────────────────────────────────────────────────────
// Default slot pools
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_FOODS: &[&str] = &[
    "oats",
    "egg omelette",
    "boiled egg",
    "cereal",
    "plain pan cakes",
    "chai",
    "lassi",
    "yogurt",
    "green tea",
    "paratha",
    "brown bread",
    "sandwich",
    "detox water",
];

/// Shared by lunch and dinner.
pub const MAIN_MEAL_FOODS: &[&str] = &[
    "roti",
    "curry (kidney bean)",
    "mutton curry",
    "kofte-curry",
    "chicken pulao",
    "chapali kabab",
    "shami kabab",
    "chicken curry",
    "chicken sajji",
    "fried fish",
    "mughal mussallam",
    "chicken biryani",
    "beef biryani",
    "mutton biryani",
    "cooked lentils",
    "nihari",
    "fruit chaat",
    "mashed potato",
    "haleem",
    "russian salad",
    "vegetable salad",
    "butter chicken",
    "chicken breast",
    "chicken wing",
    "chicken drumstick",
    "chicken fried rice",
    "egg fried rice",
    "milk shake",
    "sandwich",
    "chickpea salad",
    "palak paneer",
    "cooked mixed vegetable",
    "chicken corn soup",
    "green tea",
    "coffee",
];
