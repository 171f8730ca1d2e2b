pub mod prompts;
pub mod render;

pub use prompts::{collect_profile, parse_list, prompt_list, prompt_yes_no, ACTIVITY_LEVELS};
pub use render::{display_config, display_food_list, display_weekly_plan};
