//! Inflation compensation overlay.
//!
//! The agreement granted a temporary flat inflation compensation
//! (Inflationsausgleich) of 120 per month, bounded to January through
//! October 2024. By November 2024 the permanent adjustments supersede it, so
//! the overlay applies only to the interior of the observation window.

use rust_decimal::Decimal;

/// The flat monthly inflation compensation amount (§ 4).
pub const COMPENSATION_AMOUNT: Decimal = Decimal::from_parts(120, 0, 0, false, 0);

/// First window index the compensation is paid for (January 2024).
pub const COMPENSATION_FIRST_MONTH: usize = 1;

/// Last window index the compensation is paid for (October 2024).
pub const COMPENSATION_LAST_MONTH: usize = 10;

/// Overlays the inflation compensation on a wage series.
///
/// Every entry whose position falls into the compensation window is raised
/// by [`COMPENSATION_AMOUNT`]; all other entries are returned unchanged. The
/// transform preserves the length of the input for any input length.
///
/// # Examples
///
/// ```
/// use tarif_engine::calculation::{apply_inflation_compensation, generate_monthly_series};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = Decimal::from_str("3729.19").unwrap();
/// let series = generate_monthly_series(base);
/// let compensated = apply_inflation_compensation(&series);
///
/// assert_eq!(compensated[0], series[0]);
/// assert_eq!(compensated[1], series[1] + Decimal::from(120));
/// ```
pub fn apply_inflation_compensation(series: &[Decimal]) -> Vec<Decimal> {
    series
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if (COMPENSATION_FIRST_MONTH..=COMPENSATION_LAST_MONTH).contains(&index) {
                *value + COMPENSATION_AMOUNT
            } else {
                *value
            }
        })
        .collect()
}
