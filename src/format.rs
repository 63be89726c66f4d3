//! Localized currency formatting.
//!
//! Display amounts are rendered the way the German presentation renders
//! them: two decimal places, decimal comma, thousands separated with a dot,
//! and a trailing euro sign (e.g. `3.729,19 €`). The core calculation only
//! ever returns raw decimals; this module is consumed by the API layer when
//! assembling display strings.

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a decimal amount as a German-locale euro string.
///
/// The amount is rounded half-away-from-zero to two decimal places, matching
/// how locale-aware display formatting rounds.
///
/// # Examples
///
/// ```
/// use tarif_engine::format::format_eur;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("3729.19").unwrap();
/// assert_eq!(format_eur(amount), "3.729,19 €");
/// ```
pub fn format_eur(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, format!("{:0<2}", frac_part)),
        None => (text.as_str(), "00".to_string()),
    };

    // Group the integer digits in threes, from the right.
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}{},{} €", sign, int_grouped, frac_part)
}
