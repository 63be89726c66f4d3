//! Monthly progression series generation.
//!
//! This module produces the full Monthly-mode wage progression for a base
//! wage across the observation window, one value per month index.

use rust_decimal::Decimal;

use crate::models::{AggregationMode, WINDOW_MONTHS};

use super::adjustment::adjusted_wage;

/// Generates the Monthly-mode wage progression for a base wage.
///
/// Returns one value per month of the observation window, in order; entry
/// `i` is the adjusted wage for month index `i`. The generator is stateless
/// and deterministic, so repeated calls with the same base wage yield the
/// same series.
///
/// # Examples
///
/// ```
/// use tarif_engine::calculation::generate_monthly_series;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = Decimal::from_str("3729.19").unwrap();
/// let series = generate_monthly_series(base);
///
/// assert_eq!(series.len(), 15);
/// assert_eq!(series[0], base);
/// ```
pub fn generate_monthly_series(base_fee: Decimal) -> Vec<Decimal> {
    (0..WINDOW_MONTHS as i64)
        .map(|month_index| adjusted_wage(base_fee, month_index, AggregationMode::Monthly))
        .collect()
}
