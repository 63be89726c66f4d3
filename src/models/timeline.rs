//! The fixed observation window of the agreement.
//!
//! The progression is observed over a fixed 15-month window anchored at
//! December 2023, the month before the first adjustment takes effect. Month
//! indices are zero-based offsets into this window; the chart labels use the
//! German month names of the original presentation.

use chrono::{Datelike, Months, NaiveDate};

/// Number of months in the observation window (December 2023 - February 2025).
pub const WINDOW_MONTHS: usize = 15;

/// The first day of the anchor month (index 0).
fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
}

/// Returns the first day of the month at the given window index.
///
/// Indices beyond the window extrapolate forward; negative indices are not
/// representable here because the timeline only serves presentation labels.
///
/// # Examples
///
/// ```
/// use tarif_engine::models::month_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(month_date(0), NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
/// assert_eq!(month_date(14), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
/// ```
pub fn month_date(index: usize) -> NaiveDate {
    anchor() + Months::new(index as u32)
}

/// Returns the German ordinal label for the month at the given window index,
/// e.g. `"Dezember 23"` for index 0.
pub fn month_label(index: usize) -> String {
    let date = month_date(index);
    let name = match date.month() {
        1 => "Januar",
        2 => "Februar",
        3 => "März",
        4 => "April",
        5 => "Mai",
        6 => "Juni",
        7 => "Juli",
        8 => "August",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        12 => "Dezember",
        _ => unreachable!("chrono months are 1-12"),
    };
    format!("{} {:02}", name, date.year() % 100)
}

/// Returns the labels for all months of the observation window, in order.
pub fn month_labels() -> Vec<String> {
    (0..WINDOW_MONTHS).map(month_label).collect()
}
