use thiserror::Error;

/// Errors raised at the crafting data boundary. Evaluation itself never fails.
#[derive(Debug, Error)]
pub enum CraftingError {
    /// Wrapper around IO errors (reading catalog or character files).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON syntax and shape errors.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Character record failed validation; the previous record stays active.
    #[error("malformed character record: {0}")]
    MalformedCharacter(String),

    /// Catalog entry with data the evaluator cannot use.
    #[error("invalid recipe '{name}': {reason}")]
    InvalidRecipe { name: String, reason: String },
}
