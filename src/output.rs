use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{MealSlot, WeeklyPlan};

/// Header of the flattened CSV export.
pub const CSV_HEADER: [&str; 8] = [
    "day",
    "meal",
    "food_name",
    "grams",
    "calories",
    "protein_g",
    "carbs_g",
    "fat_g",
];

/// Pretty JSON for a plan.
pub fn plan_to_json(plan: &WeeklyPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Write a plan as pretty JSON.
pub fn write_plan_json(plan: &WeeklyPlan, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(plan_to_json(plan)?.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Write every meal line of a plan as one CSV row.
pub fn write_plan_csv<W: Write>(plan: &WeeklyPlan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for day in plan.days() {
        for slot in MealSlot::ALL {
            for line in day.meals.get(slot) {
                wtr.write_record([
                    day.day.to_string(),
                    slot.name().to_string(),
                    line.food_name.clone(),
                    format!("{:.1}", line.grams),
                    format!("{:.1}", line.calories),
                    format!("{:.1}", line.protein_g),
                    format!("{:.1}", line.carbs_g),
                    format!("{:.1}", line.fat_g),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write the CSV export to a file.
pub fn write_plan_csv_file(plan: &WeeklyPlan, path: &Path) -> Result<()> {
    write_plan_csv(plan, File::create(path)?)
}
