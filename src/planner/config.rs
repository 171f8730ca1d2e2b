use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::MealSlot;
use crate::planner::constants::*;

/// Fractions of daily calories allocated to each macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl MacroSplit {
    pub fn total(&self) -> f64 {
        self.carbs + self.protein + self.fat
    }
}

/// Fractions of daily targets allocated to each meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealSplit {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
}

impl MealSplit {
    pub fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner
    }

    pub fn share(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }
}

/// Food names eligible for each meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPools {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

impl Default for SlotPools {
    fn default() -> Self {
        let owned = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
        Self {
            breakfast: owned(BREAKFAST_FOODS),
            lunch: owned(MAIN_MEAL_FOODS),
            dinner: owned(MAIN_MEAL_FOODS),
        }
    }
}

impl SlotPools {
    pub fn names(&self, slot: MealSlot) -> &[String] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Lowercase name set for membership tests.
    pub fn key_set(&self, slot: MealSlot) -> HashSet<String> {
        self.names(slot)
            .iter()
            .map(|n| n.trim().to_lowercase())
            .collect()
    }
}

/// Everything the plan assembler can be configured with.
///
/// Deserializes from JSON; omitted fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub days: usize,
    pub cooldown: usize,
    pub top_n: usize,
    pub min_grams: f64,
    pub max_grams: f64,
    pub macro_splits: BTreeMap<String, MacroSplit>,
    pub meal_splits: BTreeMap<String, MealSplit>,
    pub pools: SlotPools,
}

impl Default for PlanConfig {
    fn default() -> Self {
        let macro_splits = DEFAULT_MACRO_SPLITS
            .iter()
            .map(|&(goal, carbs, protein, fat)| {
                (goal.to_string(), MacroSplit { carbs, protein, fat })
            })
            .collect();

        let meal_splits = DEFAULT_MEAL_SPLITS
            .iter()
            .map(|&(goal, breakfast, lunch, dinner)| {
                (
                    goal.to_string(),
                    MealSplit {
                        breakfast,
                        lunch,
                        dinner,
                    },
                )
            })
            .collect();

        Self {
            days: DEFAULT_DAYS,
            cooldown: DEFAULT_COOLDOWN,
            top_n: DEFAULT_TOP_N,
            min_grams: MIN_SERVING_GRAMS,
            max_grams: MAX_SERVING_GRAMS,
            macro_splits,
            meal_splits,
            pools: SlotPools::default(),
        }
    }
}

impl PlanConfig {
    /// Load a config from a JSON file and validate it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.normalized().validate()
    }

    /// Lowercase and trim all goal keys.
    pub fn normalized(mut self) -> Self {
        self.macro_splits = std::mem::take(&mut self.macro_splits)
            .into_iter()
            .map(|(k, v)| (k.trim().to_lowercase(), v))
            .collect();
        self.meal_splits = std::mem::take(&mut self.meal_splits)
            .into_iter()
            .map(|(k, v)| (k.trim().to_lowercase(), v))
            .collect();
        self
    }

    /// Check structural invariants, returning the config unchanged on success.
    pub fn validate(self) -> Result<Self> {
        if self.days == 0 || self.days > MAX_PLAN_DAYS {
            return Err(PlanError::InvalidConfig(format!(
                "days must be between 1 and {}, got {}",
                MAX_PLAN_DAYS, self.days
            )));
        }
        if self.top_n == 0 {
            return Err(PlanError::InvalidConfig("top_n must be at least 1".to_string()));
        }
        if !(self.min_grams >= 0.0 && self.min_grams <= self.max_grams) {
            return Err(PlanError::InvalidConfig(format!(
                "serving range [{}, {}] is not valid",
                self.min_grams, self.max_grams
            )));
        }

        for (goal, split) in &self.macro_splits {
            check_fractions(goal, "macro", &[split.carbs, split.protein, split.fat])?;
            if !self.meal_splits.contains_key(goal) {
                return Err(PlanError::InvalidConfig(format!(
                    "goal '{}' has a macro split but no meal split",
                    goal
                )));
            }
        }
        for (goal, split) in &self.meal_splits {
            check_fractions(goal, "meal", &[split.breakfast, split.lunch, split.dinner])?;
            if !self.macro_splits.contains_key(goal) {
                return Err(PlanError::InvalidConfig(format!(
                    "goal '{}' has a meal split but no macro split",
                    goal
                )));
            }
        }

        Ok(self)
    }

    /// Known goals in sorted order.
    pub fn goals(&self) -> Vec<&str> {
        self.macro_splits.keys().map(String::as_str).collect()
    }

    /// Look up both split tables for a goal (case-insensitive).
    pub fn splits_for(&self, goal: &str) -> Result<(MacroSplit, MealSplit)> {
        let key = goal.trim().to_lowercase();
        match (self.macro_splits.get(&key), self.meal_splits.get(&key)) {
            (Some(macro_split), Some(meal_split)) => Ok((*macro_split, *meal_split)),
            _ => Err(PlanError::UnknownGoal {
                goal: goal.to_string(),
                suggestion: self.suggest_goal(&key),
            }),
        }
    }

    fn suggest_goal(&self, key: &str) -> Option<String> {
        self.goals()
            .into_iter()
            .map(|g| (g, jaro_winkler(g, key)))
            .filter(|(_, score)| *score > GOAL_SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(g, _)| g.to_string())
    }
}

fn check_fractions(goal: &str, table: &str, values: &[f64]) -> Result<()> {
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(PlanError::InvalidConfig(format!(
            "{} split for '{}' has a negative or non-finite share",
            table, goal
        )));
    }
    let total: f64 = values.iter().sum();
    if (total - 1.0).abs() > SPLIT_TOLERANCE {
        return Err(PlanError::InvalidConfig(format!(
            "{} split for '{}' sums to {}, expected 1.0",
            table, goal, total
        )));
    }
    Ok(())
}
