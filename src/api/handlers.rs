//! HTTP request handlers for the compensation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{SalaryStructureResult, annual_ctc_from_lakhs, structure_with_audit};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::formatting::CurrencyFormatter;
use crate::models::{AllowanceRateTable, Amount, AuditTrace, CompensationResult, FormattedLine};
use crate::numerals::{number_to_words, parse_words, rupees_in_words};

use super::request::{FormatRequest, NumbersRequest, SalaryStructureRequest, WordsRequest};
use super::response::{
    ApiError, ApiErrorResponse, FormatResponse, NumbersResponse, WordsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/words", post(words_handler))
        .route("/numbers", post(numbers_handler))
        .route("/salary-structure", post(salary_structure_handler))
        .route("/format", post(format_handler))
        .with_state(state)
}

/// Handler for POST /words.
///
/// Spells an amount out in Indian-English words.
async fn words_handler(payload: Result<Json<WordsRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing words request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match spell_amount(request.amount) {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                amount = %body.amount,
                "Words conversion completed"
            );
            json_response(body)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /numbers.
///
/// Reads an Indian-English words phrase back into a number.
async fn numbers_handler(payload: Result<Json<NumbersRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing numbers request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match parse_words(&request.phrase, request.mode) {
        Ok(amount) => {
            info!(
                correlation_id = %correlation_id,
                mode = ?request.mode,
                amount = %amount,
                "Phrase parsed"
            );
            json_response(NumbersResponse {
                phrase: request.phrase,
                amount,
            })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /salary-structure.
///
/// Breaks an annual CTC into the monthly components a letter displays.
async fn salary_structure_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryStructureRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary structure request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match perform_structuring(&request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                scheme = request.scheme.as_str(),
                annual_ctc = %result.components.annual_ctc,
                total_monthly = %result.components.total_monthly,
                duration_us = result.audit_trace.duration_us,
                "Salary structure completed successfully"
            );
            json_response(result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /format.
///
/// Renders an amount with a currency symbol and Indian digit grouping.
async fn format_handler(
    State(state): State<AppState>,
    payload: Result<Json<FormatRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing format request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let formatter = match request.symbol {
        Some(symbol) => CurrencyFormatter::with_symbol(symbol),
        None => state.config().formatter(),
    };

    match Amount::from_rupees(request.amount) {
        Ok(amount) => json_response(FormatResponse {
            amount: amount.to_rupees(),
            formatted: formatter.format(amount),
        }),
        Err(err) => error_response(correlation_id, err),
    }
}

fn spell_amount(amount: Decimal) -> EngineResult<WordsResponse> {
    let value = Amount::from_rupees(amount)?;
    Ok(WordsResponse {
        amount: value.to_rupees(),
        words: number_to_words(value.whole_rupees())?,
        rupees_clause: rupees_in_words(value)?,
    })
}

/// Structures the requested CTC and renders the letter strings.
fn perform_structuring(
    request: &SalaryStructureRequest,
    config: &ConfigLoader,
) -> EngineResult<CompensationResult> {
    let start_time = Instant::now();

    let annual_ctc = annual_ctc_from_lakhs(request.annual_ctc_in_lakhs)?;
    let rates = match request.effective_date {
        Some(date) => config.get_allowance_rates(date)?,
        None => AllowanceRateTable::standard(),
    };

    let SalaryStructureResult {
        components,
        audit_steps,
    } = structure_with_audit(annual_ctc, request.scheme, &rates, 1);

    let formatter = config.formatter();
    let lines = components
        .lines()
        .into_iter()
        .map(|line| FormattedLine {
            monthly: formatter.format(line.monthly),
            annual: formatter.format(line.annual),
            label: line.label,
        })
        .collect();

    let annual_ctc_words = rupees_in_words(annual_ctc)?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CompensationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scheme: request.scheme,
        annual_ctc_words,
        annual_ctc_formatted: formatter.format(annual_ctc),
        lines,
        total_monthly_formatted: formatter.format(components.total_monthly),
        components,
        audit_trace: AuditTrace {
            steps: audit_steps,
            duration_us,
        },
    })
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON extraction failure onto the API error body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
