use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// NutriPlan: weekly meal plans matched to calorie and macro targets.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a multi-day meal plan.
    Plan(PlanArgs),

    /// List the food catalog with meal-slot eligibility.
    Foods {
        /// Path to the foods CSV or JSON file.
        #[arg(short, long, default_value = "foods.csv")]
        foods: PathBuf,

        /// Plan configuration JSON (slot pools, splits).
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate and print the plan configuration.
    CheckConfig {
        /// Plan configuration JSON; defaults are used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the foods CSV or JSON file.
    #[arg(short, long, default_value = "foods.csv")]
    pub foods: PathBuf,

    /// Calorie model coefficients (JSON).
    #[arg(short, long, conflicts_with = "calories")]
    pub model: Option<PathBuf>,

    /// Use a fixed daily calorie figure instead of a model.
    #[arg(long)]
    pub calories: Option<f64>,

    /// User profile JSON; prompts interactively when omitted.
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Plan configuration JSON.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of days to plan (overrides the config).
    #[arg(long)]
    pub days: Option<usize>,

    /// Recent foods per meal kept out of rotation (overrides the config).
    #[arg(long)]
    pub cooldown: Option<usize>,

    /// Write the plan as JSON to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the plan lines as CSV to this file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the plan as JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}
