use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::UserProfile;

/// Activity levels offered during intake.
pub const ACTIVITY_LEVELS: [&str; 5] = [
    "sedentary",
    "lightly active",
    "moderately active",
    "very active",
    "extra active",
];

const GENDERS: [&str; 2] = ["male", "female"];

/// Prompt for a number with a default.
fn prompt_number<T>(prompt: &str, default: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a valid number", input.trim())))
}

fn prompt_choice(prompt: &str, options: &[&str], default: usize) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;
    Ok(options[selection].to_string())
}

/// Prompt for a comma-separated list; empty input gives an empty list.
pub fn prompt_list(prompt: &str) -> Result<Vec<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(parse_list(&input))
}

/// Split a comma-separated list, dropping blanks.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collect a full profile interactively.
///
/// `goals` are the goals the active configuration knows about.
pub fn collect_profile(goals: &[&str]) -> Result<UserProfile> {
    if goals.is_empty() {
        return Err(PlanError::InvalidConfig("no goals configured".to_string()));
    }

    let age: u32 = prompt_number("Age (years)", "30")?;
    let weight_kg: f64 = prompt_number("Weight (kg)", "70")?;
    let height_cm: f64 = prompt_number("Height (cm)", "170")?;
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(PlanError::InvalidInput(
            "Weight and height must be positive".to_string(),
        ));
    }

    let gender = prompt_choice("Gender", &GENDERS, 0)?;
    let activity_level = prompt_choice("Activity level", &ACTIVITY_LEVELS, 2)?;
    let target_goal = prompt_choice("Goal", goals, 0)?;
    let allergies = prompt_list("Allergies (comma-separated, Enter for none)")?;
    let health_conditions =
        prompt_list("Health conditions, e.g. diabetes, hypertension (Enter for none)")?;

    Ok(UserProfile {
        age,
        weight_kg,
        height_cm,
        gender,
        activity_level,
        target_goal,
        allergies,
        health_conditions,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
