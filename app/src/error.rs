//! Application error handling
//!
//! Wraps profile validation errors and the I/O and format errors of the
//! command-line surface, and maps each to a stable error code.

use fitness_planner_shared::types::{ErrorDetail, ErrorResponse};
use fitness_planner_shared::PlanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("Calculate a plan before opening the results")]
    NoPlan,

    #[error("Unsupported profile file '{0}': expected a .toml or .json extension")]
    UnsupportedProfileFormat(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Plan(err) => err.code(),
            AppError::NoPlan => "NO_PLAN",
            AppError::UnsupportedProfileFormat(_) => "BAD_REQUEST",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) | AppError::Toml(_) => "PARSE_ERROR",
            AppError::Csv(_) => "EXPORT_ERROR",
        }
    }

    /// Error body for `--format json` output
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            AppError::Plan(err) => ErrorResponse::from(err),
            other => ErrorResponse {
                error: ErrorDetail {
                    code: other.code().to_string(),
                    message: other.to_string(),
                    field: None,
                    details: None,
                },
            },
        }
    }
}

/// Result type alias for app operations
pub type AppResult<T> = Result<T, AppError>;
