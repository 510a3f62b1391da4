use thiserror::Error;

/// Error type for values rejected at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid date format `{0}`. Please use YYYY-MM-DD.")]
    InvalidDate(String),
    #[error("Invalid category `{0}`. Please choose a category from the predefined list.")]
    InvalidCategory(String),
    #[error("Invalid amount `{0}`. Please enter a non-negative number.")]
    InvalidAmount(String),
    #[error("Invalid input. Please enter a valid number.")]
    InvalidBudget(String),
}

impl InputError {
    /// The raw text that failed to parse.
    pub fn raw(&self) -> &str {
        match self {
            InputError::InvalidDate(raw)
            | InputError::InvalidCategory(raw)
            | InputError::InvalidAmount(raw)
            | InputError::InvalidBudget(raw) => raw,
        }
    }
}
