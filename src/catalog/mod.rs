mod filter;
mod loader;
mod store;

pub use filter::{
    AllergyFilter, CatalogFilter, NoFilter, DIABETES_EXCLUSIONS, HYPERTENSION_EXCLUSIONS,
};
pub use loader::{load_catalog, parse_foods_json, read_foods_csv, REQUIRED_COLUMNS};
pub use store::FoodCatalog;
