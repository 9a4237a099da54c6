//! Response types for the payroll engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            EngineError::RateNotConfigured { kind } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "RATE_NOT_CONFIGURED",
                    message,
                    format!("Record a {} rate set before computing salaries", kind),
                ),
            ),
            EngineError::InvalidQuantity { category, .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Quantity for '{}' must not be negative", category),
                ),
            ),
            EngineError::InvalidRate { category, .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Rate for '{}' must not be negative", category),
                ),
            ),
            EngineError::InvalidDateRange { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_DATE_RANGE", message),
            ),
            EngineError::InconsistentTotals { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INCONSISTENT_TOTALS", message),
            ),
            EngineError::NoEmployeesPresent { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("NO_EMPLOYEES_PRESENT", message),
            ),
            EngineError::CalculationError { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("CALCULATION_ERROR", message),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RateKind, WorkCategory};
    use chrono::NaiveDate;

    #[test]
    fn test_rate_not_configured_is_not_found() {
        let response: ApiErrorResponse = EngineError::RateNotConfigured {
            kind: RateKind::Private,
        }
        .into();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "RATE_NOT_CONFIGURED");
        assert_eq!(response.error.message, "No private rate configured");
    }

    #[test]
    fn test_invalid_quantity_is_bad_request() {
        let response: ApiErrorResponse = EngineError::InvalidQuantity {
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            category: WorkCategory::Panni,
            quantity: -3,
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert_eq!(
            response.error.details.as_deref(),
            Some("Quantity for 'panni' must not be negative")
        );
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let json = serde_json::to_value(ApiError::malformed_json("bad")).unwrap();
        assert!(json.get("details").is_none());
    }
}
