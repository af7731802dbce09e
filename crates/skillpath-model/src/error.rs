use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid duration '{value}': expected H:MM:SS")]
    InvalidDuration { value: String },
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
