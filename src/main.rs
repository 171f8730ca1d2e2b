use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use nutri_plan_rs::catalog::{load_catalog, AllergyFilter};
use nutri_plan_rs::cli::{Cli, Command, PlanArgs};
use nutri_plan_rs::error::{PlanError, Result};
use nutri_plan_rs::interface::{
    collect_profile, display_config, display_food_list, display_weekly_plan, prompt_yes_no,
};
use nutri_plan_rs::logging::init_logging;
use nutri_plan_rs::models::UserProfile;
use nutri_plan_rs::output::{plan_to_json, write_plan_csv_file, write_plan_json};
use nutri_plan_rs::planner::{PlanAssembler, PlanConfig};
use nutri_plan_rs::predictor::{CalorieModel, FixedCalorieModel, LinearCalorieModel};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(if e.is_configuration() { 2 } else { 1 });
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Plan(args) => cmd_plan(args),
        Command::Foods { foods, config } => cmd_foods(&foods, config.as_deref()),
        Command::CheckConfig { config } => cmd_check_config(config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<PlanConfig> {
    match path {
        Some(p) => PlanConfig::from_json_file(p),
        None => PlanConfig::default().validate(),
    }
}

fn load_model(args: &PlanArgs) -> Result<Box<dyn CalorieModel>> {
    match (&args.model, args.calories) {
        (Some(path), _) => Ok(Box::new(LinearCalorieModel::from_json_file(path)?)),
        (None, Some(kcal)) => Ok(Box::new(FixedCalorieModel(kcal))),
        (None, None) => Err(PlanError::InvalidInput(
            "Provide either --model or --calories".to_string(),
        )),
    }
}

fn load_profile(path: Option<&PathBuf>, config: &PlanConfig) -> Result<UserProfile> {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => collect_profile(&config.goals()),
    }
}

/// Confirm before replacing an existing file.
fn may_write(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    prompt_yes_no(&format!("{} exists. Overwrite?", path.display()), false)
}

/// Generate a meal plan for one profile.
fn cmd_plan(args: PlanArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(days) = args.days {
        config.days = days;
    }
    if let Some(cooldown) = args.cooldown {
        config.cooldown = cooldown;
    }

    let catalog = load_catalog(&args.foods)?;
    if !args.json {
        println!("Loaded {} foods", catalog.len());
    }

    let model = load_model(&args)?;
    let profile = load_profile(args.profile.as_ref(), &config)?;

    let filter = AllergyFilter::default();
    let assembler = PlanAssembler::new(&catalog, model.as_ref(), &filter, config)?;
    let plan = assembler.generate(&profile)?;

    if args.json {
        println!("{}", plan_to_json(&plan)?);
    } else {
        let meal_split = assembler
            .config()
            .splits_for(&profile.target_goal)
            .ok()
            .map(|(_, meal_split)| meal_split);
        display_weekly_plan(&plan, meal_split.as_ref());
    }

    if let Some(path) = &args.output {
        if may_write(path)? {
            write_plan_json(&plan, path)?;
            eprintln!("Plan written to {}", path.display());
        }
    }

    if let Some(path) = &args.csv {
        if may_write(path)? {
            write_plan_csv_file(&plan, path)?;
            eprintln!("Plan lines written to {}", path.display());
        }
    }

    Ok(())
}

/// List the catalog.
fn cmd_foods(foods: &Path, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let catalog = load_catalog(foods)?;
    display_food_list(&catalog, &config);
    Ok(())
}

/// Validate and print the configuration.
fn cmd_check_config(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    display_config(&config);
    println!("Configuration OK ({} goals).", config.goals().len());
    Ok(())
}
