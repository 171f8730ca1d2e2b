use std::collections::VecDeque;

use crate::models::{FoodItem, MealSlot};
use crate::planner::constants::DEFAULT_COOLDOWN;

/// Recently served foods per meal slot, owned by a single plan-generation call.
///
/// Each slot keeps a FIFO of at most `cooldown` lowercase food keys.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationState {
    cooldown: usize,
    history: [VecDeque<String>; 3],
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl RotationState {
    pub fn new(cooldown: usize) -> Self {
        Self {
            cooldown,
            history: Default::default(),
        }
    }

    pub fn cooldown(&self) -> usize {
        self.cooldown
    }

    /// Recent foods for `slot`, oldest first.
    pub fn recent(&self, slot: MealSlot) -> impl Iterator<Item = &str> {
        self.history[slot.index()].iter().map(String::as_str)
    }

    /// Whether `name` is on cooldown for `slot` (case-insensitive).
    pub fn is_recent(&self, slot: MealSlot, name: &str) -> bool {
        let key = name.trim().to_lowercase();
        self.history[slot.index()].iter().any(|k| *k == key)
    }

    /// `pool` without the foods on cooldown for `slot`, order preserved.
    pub fn filter<'a>(&self, pool: &[&'a FoodItem], slot: MealSlot) -> Vec<&'a FoodItem> {
        let recent = &self.history[slot.index()];
        pool.iter()
            .copied()
            .filter(|food| !recent.contains(&food.key()))
            .collect()
    }

    /// Append a served food, evicting the oldest entries beyond the cooldown.
    pub fn record(&mut self, slot: MealSlot, name: &str) {
        let recent = &mut self.history[slot.index()];
        recent.push_back(name.trim().to_lowercase());
        while recent.len() > self.cooldown {
            recent.pop_front();
        }
    }
}
