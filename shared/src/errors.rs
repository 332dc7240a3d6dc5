//! Error types for the Fitness Planner

use thiserror::Error;

/// Errors raised at the boundary between raw form input and the typed profile
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Unrecognized {field} '{value}'. Must be one of: {expected}")]
    UnrecognizedEnum {
        field: String,
        value: String,
        expected: String,
    },
}

impl PlanError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        PlanError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn unrecognized(field: &str, value: &str, expected: &[&str]) -> Self {
        PlanError::UnrecognizedEnum {
            field: field.to_string(),
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }

    /// Name of the offending form field
    pub fn field(&self) -> &str {
        match self {
            PlanError::InvalidInput { field, .. } | PlanError::UnrecognizedEnum { field, .. } => {
                field
            }
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            PlanError::InvalidInput { .. } => "VALIDATION_ERROR",
            PlanError::UnrecognizedEnum { .. } => "UNRECOGNIZED_VALUE",
        }
    }
}
