use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::catalog::FoodCatalog;
use crate::error::{PlanError, Result};
use crate::models::FoodItem;

/// Columns a foods CSV must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["food_name", "calories", "protein_g", "carbs_g", "fat_g"];

/// Load a catalog from a `.json` array or a CSV file (any other extension).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let foods = if is_json {
        let content = fs::read_to_string(path)?;
        parse_foods_json(&content)?
    } else {
        read_foods_csv(fs::File::open(path)?)?
    };

    debug!("Loaded {} foods from {}", foods.len(), path.display());
    for food in &foods {
        trace!("{}", food.debug_string());
    }
    Ok(FoodCatalog::new(foods))
}

/// Parse foods from a CSV reader with a header row.
///
/// Extra columns are ignored. Empty cells, and cells missing from the end of
/// a short row, read as zero.
pub fn read_foods_csv<R: Read>(reader: R) -> Result<Vec<FoodItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PlanError::MissingColumn(column.to_string()));
        }
    }

    let mut foods: Vec<FoodItem> = Vec::new();
    for record in rdr.records() {
        let mut record = record?;
        while record.len() < headers.len() {
            record.push_field("");
        }
        foods.push(record.deserialize(Some(&headers))?);
    }
    Ok(drop_unnamed(foods))
}

/// Parse foods from a JSON array of food objects.
pub fn parse_foods_json(content: &str) -> Result<Vec<FoodItem>> {
    let foods: Vec<FoodItem> = serde_json::from_str(content)?;
    Ok(drop_unnamed(foods))
}

fn drop_unnamed(foods: Vec<FoodItem>) -> Vec<FoodItem> {
    let total = foods.len();
    let named: Vec<FoodItem> = foods
        .into_iter()
        .filter(|f| !f.food_name.trim().is_empty())
        .collect();

    if named.len() < total {
        warn!("Skipped {} foods without a name", total - named.len());
    }
    named
}
