use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Unknown goal: '{goal}'{}", suggestion_hint(.suggestion))]
    UnknownGoal {
        goal: String,
        suggestion: Option<String>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Calorie model error: {0}")]
    UpstreamModel(String),

    #[error("Missing column in foods file: {0}")]
    MissingColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PlanError {
    /// True for errors caused by the split tables or goal rather than by data or I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(self, PlanError::UnknownGoal { .. } | PlanError::InvalidConfig(_))
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
