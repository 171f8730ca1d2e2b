pub mod assembler;
pub mod config;
pub mod constants;
pub mod portions;
pub mod ranking;
pub mod rotation;

pub use assembler::{daily_macro_targets, generate_weekly_plan, PlanAssembler};
pub use config::{MacroSplit, MealSplit, PlanConfig, SlotPools};
pub use constants::*;
pub use portions::{nnls, solve_portions, PortionSolution, PortionSolver};
pub use ranking::{cosine_similarity, rank};
pub use rotation::RotationState;
