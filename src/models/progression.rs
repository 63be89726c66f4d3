//! Progression result models for the Wage Progression Engine.
//!
//! This module contains the [`ProgressionResult`] type and its associated
//! structures that capture all outputs of a progression calculation: the
//! chart payload with both series, the summary table for the key months, and
//! the audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AggregationMode;

/// A single point of a wage series.
///
/// Each point carries the raw decimal amount for the calculation consumers
/// and the localized currency string for direct display.
///
/// # Example
///
/// ```
/// use tarif_engine::models::SeriesPoint;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let point = SeriesPoint {
///     month_index: 1,
///     month: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     amount: Decimal::from_str("3829.19").unwrap(),
///     formatted: "3.829,19 €".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Zero-based offset into the observation window.
    pub month_index: i64,
    /// The first day of the month this point represents.
    pub month: NaiveDate,
    /// The gross monthly wage amount.
    pub amount: Decimal,
    /// The amount rendered as a localized currency string.
    pub formatted: String,
}

/// A labeled series of points for the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// The display label of the series.
    pub label: String,
    /// One point per month of the observation window.
    pub points: Vec<SeriesPoint>,
}

/// The complete chart payload: ordinal labels plus both series.
///
/// The first dataset is the raw monthly progression, the second is the same
/// progression with the inflation compensation overlay applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// One ordinal label per month (e.g. "Dezember 23").
    pub labels: Vec<String>,
    /// The plotted series.
    pub datasets: Vec<ChartDataset>,
}

/// A single cell of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCell {
    /// Zero-based offset into the observation window.
    pub month_index: i64,
    /// The ordinal label of the month.
    pub month_label: String,
    /// The computed amount for this month and the row's aggregation mode.
    pub amount: Decimal,
    /// The amount rendered as a localized currency string.
    pub formatted: String,
}

/// A row of the summary table: one aggregation mode across the key months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// The aggregation mode of this row.
    pub mode: AggregationMode,
    /// The display label of the row (e.g. "Brutto im Monat").
    pub label: String,
    /// One cell per key month of the agreement.
    pub cells: Vec<SummaryCell>,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the agreement clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency.
///
/// # Example
///
/// ```
/// use tarif_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a progression calculation.
///
/// This struct captures all outputs of the engine for one tier selection:
/// the resolved base fee, the chart payload with both wage series, the
/// summary table for the key months, and a complete audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The selected pay grade code (e.g. "12").
    pub grade: String,
    /// The selected step within the pay grade (1-based).
    pub step: u32,
    /// The base monthly gross wage the progression starts from.
    pub base_fee: Decimal,
    /// The chart payload: labels plus raw and compensated series.
    pub chart: ChartData,
    /// The summary table: one row per aggregation mode.
    pub summary: Vec<SummaryRow>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
