use crate::collectors::Platform;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{platform} response has no '{key}' field: {detail}")]
    UpstreamSchema {
        platform: Platform,
        key: &'static str,
        detail: String,
    },

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Malformed salary text: '{0}'")]
    MalformedSalary(String),

    #[error("Salary overflow: {0}")]
    SalaryOverflow(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
