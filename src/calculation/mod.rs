//! Calculation logic for the Wage Progression Engine.
//!
//! This module contains the adjustment rule engine that applies the
//! date-gated stages of the agreement to a base wage, the generator for the
//! monthly progression series across the observation window, and the
//! inflation compensation overlay.

mod adjustment;
mod inflation_compensation;
mod monthly_series;

pub use adjustment::{
    AdjustedWageResult, AdjustmentKind, FEBRUARY_25, JANUARY_24, JANUARY_25, NOVEMBER_24,
    ScheduledAdjustment, adjusted_wage, adjustment_schedule, annual_bonus_rate,
    calculate_adjusted_wage, months_per_year,
};
pub use inflation_compensation::{
    COMPENSATION_AMOUNT, COMPENSATION_FIRST_MONTH, COMPENSATION_LAST_MONTH,
    apply_inflation_compensation,
};
pub use monthly_series::generate_monthly_series;
