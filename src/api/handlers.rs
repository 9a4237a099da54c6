//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    RateSource, aggregate_range, compute_daily_amount, resolve_rate, split_range,
};
use crate::error::EngineResult;
use crate::models::{AuditWarning, DateRange, RateKind, SalaryRangeReport, WorkRecord};

use super::request::{DailyAmountRequest, SalaryRangeRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary/daily", post(daily_amount_handler))
        .route("/salary/range", post(salary_range_handler))
        .route("/rates/:kind/latest", get(latest_rate_handler))
        .with_state(state)
}

/// Handler for POST /salary/daily.
///
/// Prices one work record against the current rate set of the requested kind.
async fn daily_amount_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyAmountRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily amount request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result = resolve_rate(state.config(), request.rate_kind)
        .and_then(|rates| compute_daily_amount(&request.record, &rates));

    match result {
        Ok(daily) => {
            info!(
                correlation_id = %correlation_id,
                date = %daily.date,
                day_total = %daily.day_total,
                "Daily amount computed"
            );
            (StatusCode::OK, Json(daily)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Daily amount failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /salary/range.
///
/// Aggregates the records inside the requested range and splits the pay.
async fn salary_range_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary range request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_range_calculation(request, state.config()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                records = report.aggregate.days.len(),
                grand_total = %state.config().metadata().format_amount(report.aggregate.grand_total),
                warnings = report.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Salary range computed"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Salary range failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /rates/:kind/latest.
async fn latest_rate_handler(
    State(state): State<AppState>,
    kind: Result<Path<RateKind>, PathRejection>,
) -> Response {
    let kind = match kind {
        Ok(Path(kind)) => kind,
        Err(rejection) => {
            return ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_RATE_KIND",
                    "Rate kind must be 'public' or 'private'",
                    rejection.body_text(),
                ),
            )
            .into_response();
        }
    };

    match resolve_rate(state.config(), kind) {
        Ok(rates) => (StatusCode::OK, Json(rates)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Computes the salary report for a range request.
///
/// Records outside the range are dropped and the rest stably sorted by date,
/// so records sharing a date keep their submitted order.
fn perform_range_calculation<S: RateSource + ?Sized>(
    request: SalaryRangeRequest,
    rates: &S,
) -> EngineResult<SalaryRangeReport> {
    let period = DateRange::new(request.start_date, request.end_date)?;
    let rate_set = resolve_rate(rates, request.rate_kind)?;

    let mut records: Vec<WorkRecord> = request
        .records
        .into_iter()
        .filter(|r| period.contains_date(r.date))
        .collect();
    records.sort_by_key(|r| r.date);

    let aggregate = aggregate_range(&records, &rate_set)?;
    let split = split_range(&aggregate)?;

    let mut warnings = Vec::new();
    if split.verify().is_err() {
        warnings.push(AuditWarning::inconsistent_totals(split.cash));
    }

    Ok(SalaryRangeReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        period,
        aggregate,
        split,
        warnings,
    })
}

/// Maps a JSON body rejection to an API error response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}
