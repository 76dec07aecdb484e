//! Response types for the compensation engine API.
//!
//! This module defines the success bodies of the simple endpoints together
//! with the error response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Response body for the `/words` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordsResponse {
    /// The amount as received.
    pub amount: Decimal,
    /// The whole-rupee part spelled out, e.g. "Twelve Lakh Thirty Four Thousand".
    pub words: String,
    /// The legal clause, e.g. "Rupees Eight Lakh Only".
    pub rupees_clause: String,
}

/// Response body for the `/numbers` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumbersResponse {
    /// The phrase as received.
    pub phrase: String,
    /// The value the phrase denotes.
    pub amount: Decimal,
}

/// Response body for the `/format` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatResponse {
    /// The amount as received.
    pub amount: Decimal,
    /// The amount with symbol and Indian digit grouping.
    pub formatted: String,
}

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
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidAmount { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_AMOUNT",
                message,
                "Amounts must be non-negative with at most two decimal places",
            )),
            EngineError::ParseError { .. } => Self::bad_request(ApiError::with_details(
                "PARSE_ERROR",
                message,
                "The phrase is not a well-formed Indian-English amount",
            )),
            EngineError::RangeError { .. } => {
                Self::bad_request(ApiError::new("RANGE_ERROR", message))
            }
            EngineError::RateNotFound { .. } => Self::bad_request(ApiError::with_details(
                "RATE_NOT_FOUND",
                message,
                "No allowance rate file covers the requested effective date",
            )),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}
