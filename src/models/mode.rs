//! Aggregation mode for progression values.
//!
//! This module defines the [`AggregationMode`] enum that controls how a
//! computed monthly value is reported.

use serde::{Deserialize, Serialize};

/// Determines how an adjusted monthly wage value is aggregated.
///
/// The mode only affects the final scaling of a computed value; it never
/// changes which date-gated adjustments of the agreement apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    /// The value for a single month, as-is.
    Monthly,
    /// The value annualized by multiplying with twelve.
    Yearly,
    /// The annualized value plus the one-time annual bonus
    /// (Jahressonderzahlung).
    YearlyWithBonus,
}

impl AggregationMode {
    /// Returns true if the mode reports an annualized value.
    pub fn is_annualized(&self) -> bool {
        matches!(self, AggregationMode::Yearly | AggregationMode::YearlyWithBonus)
    }
}
