//! HTTP request handlers for the Wage Progression Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    FEBRUARY_25, JANUARY_24, NOVEMBER_24, adjusted_wage, apply_inflation_compensation,
    calculate_adjusted_wage, generate_monthly_series,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::format::format_eur;
use crate::models::{
    AggregationMode, AuditStep, AuditTrace, AuditWarning, ChartData, ChartDataset,
    ProgressionResult, SeriesPoint, SummaryCell, SummaryRow, month_date, month_label,
    month_labels,
};

use super::request::ProgressionRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// The display label of the raw monthly series.
const MONTHLY_SERIES_LABEL: &str = "Bruttoentgelt im Monat inkl. Dataportzulage";

/// The display label of the compensated monthly series.
const COMPENSATED_SERIES_LABEL: &str =
    "Bruttoentgelt im Monat inkl. Dataportzulage und Inflationsausgleich";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/progression", post(progression_handler))
        .with_state(state)
}

/// Handler for POST /progression endpoint.
///
/// Accepts a tier selection and returns the computed wage progression.
async fn progression_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProgressionRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing progression request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the pay grade exists
    let config = state.config();
    if let Err(err) = config.get_grade(&request.grade) {
        warn!(
            correlation_id = %correlation_id,
            grade = %request.grade,
            "Pay grade not found"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Perform the calculation
    let start_time = Instant::now();
    match perform_progression(&request, config) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                grade = %request.grade,
                step = request.step,
                base_fee = %result.base_fee,
                duration_us = duration.as_micros(),
                "Progression computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Progression calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Builds the series points for a sequence of monthly amounts.
fn series_points(values: &[Decimal]) -> Vec<SeriesPoint> {
    values
        .iter()
        .enumerate()
        .map(|(index, amount)| SeriesPoint {
            month_index: index as i64,
            month: month_date(index),
            amount: *amount,
            formatted: format_eur(*amount),
        })
        .collect()
}

/// Performs the progression calculation for a tier selection.
fn perform_progression(
    request: &ProgressionRequest,
    config: &ConfigLoader,
) -> EngineResult<ProgressionResult> {
    let start_time = Instant::now();
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // Resolve the base wage: request override takes precedence over the tier table
    let base_fee = match request.base_fee {
        Some(override_fee) => {
            if override_fee < Decimal::ZERO {
                return Err(EngineError::InvalidSelection {
                    field: "base_fee".to_string(),
                    message: "must not be negative".to_string(),
                });
            }

            audit_steps.push(AuditStep {
                step_number,
                rule_id: "base_fee_lookup".to_string(),
                rule_name: "Base Fee Lookup".to_string(),
                clause_ref: "Anlage A".to_string(),
                input: serde_json::json!({
                    "grade": request.grade,
                    "step": request.step,
                    "override_fee": override_fee.normalize().to_string(),
                }),
                output: serde_json::json!({
                    "base_fee": override_fee.normalize().to_string(),
                    "source": "request_override",
                }),
                reasoning: format!(
                    "Using request override {} instead of tier table lookup",
                    override_fee.normalize()
                ),
            });
            override_fee
        }
        None => {
            let grade = config.get_grade(&request.grade)?;
            let fee = config.get_base_fee(&request.grade, request.step)?;

            audit_steps.push(AuditStep {
                step_number,
                rule_id: "base_fee_lookup".to_string(),
                rule_name: "Base Fee Lookup".to_string(),
                clause_ref: grade.clause.clone(),
                input: serde_json::json!({
                    "grade": request.grade,
                    "step": request.step,
                }),
                output: serde_json::json!({
                    "base_fee": fee.normalize().to_string(),
                    "source": "tier_table",
                }),
                reasoning: format!(
                    "Looked up Entgeltgruppe {} Stufe {}: {}",
                    request.grade, request.step, fee.normalize()
                ),
            });
            fee
        }
    };
    step_number += 1;

    // Record the stage-by-stage breakdown for the key months of the agreement
    let key_months = [JANUARY_24, NOVEMBER_24, FEBRUARY_25];
    for month in key_months {
        let breakdown =
            calculate_adjusted_wage(base_fee, month, AggregationMode::Monthly, step_number);
        step_number += breakdown.audit_steps.len() as u32;
        audit_steps.extend(breakdown.audit_steps);
    }

    // Generate the monthly progression across the observation window
    let monthly = generate_monthly_series(base_fee);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "monthly_series".to_string(),
        rule_name: "Monthly Progression".to_string(),
        clause_ref: "§ 2".to_string(),
        input: serde_json::json!({
            "base_fee": base_fee.normalize().to_string(),
            "months": monthly.len(),
        }),
        output: serde_json::json!({
            "first": monthly.first().map(|v| v.normalize().to_string()),
            "last": monthly.last().map(|v| v.normalize().to_string()),
        }),
        reasoning: format!(
            "Generated {} monthly values from {} to {}",
            monthly.len(),
            month_label(0),
            month_label(monthly.len() - 1)
        ),
    });
    step_number += 1;

    // Overlay the temporary inflation compensation
    let compensated = apply_inflation_compensation(&monthly);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "inflation_compensation".to_string(),
        rule_name: "Inflationsausgleich".to_string(),
        clause_ref: "§ 4".to_string(),
        input: serde_json::json!({
            "months": monthly.len(),
        }),
        output: serde_json::json!({
            "compensated_from": month_label(1),
            "compensated_to": month_label(10),
        }),
        reasoning: "Added 120 per month from Januar 24 through Oktober 24".to_string(),
    });

    // Assemble the summary table: one row per aggregation mode, one cell per key month
    let modes = [
        (AggregationMode::Monthly, "Brutto im Monat"),
        (AggregationMode::Yearly, "Brutto im Jahr"),
        (
            AggregationMode::YearlyWithBonus,
            "Brutto im Jahr mit Jahressonderzahlung",
        ),
    ];
    let summary: Vec<SummaryRow> = modes
        .into_iter()
        .map(|(mode, label)| SummaryRow {
            mode,
            label: label.to_string(),
            cells: key_months
                .iter()
                .map(|&month| {
                    let amount = adjusted_wage(base_fee, month, mode);
                    SummaryCell {
                        month_index: month,
                        month_label: month_label(month as usize),
                        amount,
                        formatted: format_eur(amount),
                    }
                })
                .collect(),
        })
        .collect();

    let chart = ChartData {
        labels: month_labels(),
        datasets: vec![
            ChartDataset {
                label: MONTHLY_SERIES_LABEL.to_string(),
                points: series_points(&monthly),
            },
            ChartDataset {
                label: COMPENSATED_SERIES_LABEL.to_string(),
                points: series_points(&compensated),
            },
        ],
    };

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(ProgressionResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        grade: request.grade.clone(),
        step: request.step,
        base_fee,
        chart,
        summary,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}
