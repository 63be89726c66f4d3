//! Core data models for the Wage Progression Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod mode;
mod progression;
mod timeline;

pub use mode::AggregationMode;
pub use progression::{
    AuditStep, AuditTrace, AuditWarning, ChartData, ChartDataset, ProgressionResult, SeriesPoint,
    SummaryCell, SummaryRow,
};
pub use timeline::{WINDOW_MONTHS, month_date, month_label, month_labels};
