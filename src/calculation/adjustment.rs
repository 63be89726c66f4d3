//! The adjustment rule engine of the agreement.
//!
//! This module applies the date-gated wage adjustments of the Dataport
//! collective agreement 2023 to a base monthly gross wage. Each adjustment
//! becomes effective in a specific month of the observation window and stays
//! in effect for every later month, so the stages are gated on
//! `month_index >= effective_index` rather than matched per month. The stages
//! are cumulative on the running value and applied in the fixed order of the
//! agreement; the percentage stage and the annual bonus are computed on the
//! untouched base wage.

use rust_decimal::Decimal;

use crate::models::{AggregationMode, AuditStep};

/// Window index of January 2024, the first month of the Dataportzulage.
pub const JANUARY_24: i64 = 1;

/// Window index of November 2024, the first month of the Sockelbetrag.
pub const NOVEMBER_24: i64 = 11;

/// Window index of January 2025, the first month of the Angleichungsbetrag.
pub const JANUARY_25: i64 = 13;

/// Window index of February 2025, the first month of the linear increase.
pub const FEBRUARY_25: i64 = 14;

/// How a scheduled adjustment changes the running value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentKind {
    /// A flat amount added to the running value.
    Flat(Decimal),
    /// A share of the original base wage added to the running value.
    ///
    /// The percentage is always computed on the untouched base wage, not on
    /// the value accumulated by earlier stages.
    PercentOfBase(Decimal),
}

/// One date-gated adjustment of the agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdjustment {
    /// The unique identifier of the adjustment rule.
    pub rule_id: &'static str,
    /// The human-readable name of the adjustment.
    pub rule_name: &'static str,
    /// Reference to the agreement clause defining this adjustment.
    pub clause_ref: &'static str,
    /// The window index of the month the adjustment becomes effective.
    pub effective_index: i64,
    /// The kind and magnitude of the adjustment.
    pub kind: AdjustmentKind,
}

impl ScheduledAdjustment {
    /// Returns the amount this adjustment adds for the given base wage.
    pub fn delta(&self, base_fee: Decimal) -> Decimal {
        match self.kind {
            AdjustmentKind::Flat(amount) => amount,
            AdjustmentKind::PercentOfBase(rate) => base_fee * rate,
        }
    }
}

/// The adjustment schedule of the agreement, in application order.
///
/// The order is part of the agreement and must not be rearranged; every stage
/// whose effective month has been reached applies, and its effect persists
/// for all later months.
static ADJUSTMENT_SCHEDULE: [ScheduledAdjustment; 4] = [
    ScheduledAdjustment {
        rule_id: "flat_increase_2024_01",
        rule_name: "Dataportzulage",
        clause_ref: "§ 2 Abs. 1",
        effective_index: JANUARY_24,
        kind: AdjustmentKind::Flat(Decimal::from_parts(100, 0, 0, false, 0)),
    },
    ScheduledAdjustment {
        rule_id: "flat_increase_2024_11",
        rule_name: "Sockelbetrag",
        clause_ref: "§ 2 Abs. 2",
        effective_index: NOVEMBER_24,
        kind: AdjustmentKind::Flat(Decimal::from_parts(200, 0, 0, false, 0)),
    },
    ScheduledAdjustment {
        rule_id: "flat_increase_2025_01",
        rule_name: "Angleichungsbetrag",
        clause_ref: "§ 2 Abs. 3",
        effective_index: JANUARY_25,
        kind: AdjustmentKind::Flat(Decimal::from_parts(10, 0, 0, false, 0)),
    },
    ScheduledAdjustment {
        rule_id: "percent_increase_2025_02",
        rule_name: "Lineare Erhöhung",
        clause_ref: "§ 2 Abs. 4",
        effective_index: FEBRUARY_25,
        // 5.5% of the original base wage
        kind: AdjustmentKind::PercentOfBase(Decimal::from_parts(55, 0, 0, false, 3)),
    },
];

/// Returns the adjustment schedule of the agreement, in application order.
pub fn adjustment_schedule() -> &'static [ScheduledAdjustment] {
    &ADJUSTMENT_SCHEDULE
}

/// Returns the number of months in a year as a decimal factor.
pub fn months_per_year() -> Decimal {
    Decimal::from_parts(12, 0, 0, false, 0)
}

/// Returns the annual bonus rate as defined in § 3 (Jahressonderzahlung).
///
/// The bonus is 0.65 of one monthly base wage, paid once per year on top of
/// the annualized value.
pub fn annual_bonus_rate() -> Decimal {
    Decimal::new(65, 2)
}

/// Computes the adjusted wage for a base wage, month index, and mode.
///
/// This is the core rule of the engine: starting from the base wage, every
/// scheduled adjustment whose effective month has been reached is added, then
/// the value is scaled according to the aggregation mode. The function is
/// pure and total; month indices outside the observation window simply
/// extrapolate the threshold checks.
///
/// # Arguments
///
/// * `base_fee` - The base monthly gross wage of the selected tier
/// * `month_index` - Zero-based offset into the observation window
/// * `mode` - How the resulting value is aggregated
///
/// # Examples
///
/// ```
/// use tarif_engine::calculation::adjusted_wage;
/// use tarif_engine::models::AggregationMode;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = Decimal::from_str("3729.19").unwrap();
///
/// // Before the first adjustment the base wage is unchanged.
/// assert_eq!(adjusted_wage(base, 0, AggregationMode::Monthly), base);
///
/// // From January 2024 the Dataportzulage applies.
/// assert_eq!(
///     adjusted_wage(base, 1, AggregationMode::Monthly),
///     Decimal::from_str("3829.19").unwrap()
/// );
/// ```
pub fn adjusted_wage(base_fee: Decimal, month_index: i64, mode: AggregationMode) -> Decimal {
    let mut value = base_fee;

    for adjustment in &ADJUSTMENT_SCHEDULE {
        if month_index >= adjustment.effective_index {
            value += adjustment.delta(base_fee);
        }
    }

    match mode {
        AggregationMode::Monthly => value,
        AggregationMode::Yearly => value * months_per_year(),
        AggregationMode::YearlyWithBonus => {
            value * months_per_year() + annual_bonus_rate() * base_fee
        }
    }
}

/// The result of an audited adjustment calculation.
#[derive(Debug, Clone)]
pub struct AdjustedWageResult {
    /// The adjusted and aggregated wage amount.
    pub amount: Decimal,
    /// The audit steps recording every applied rule, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the adjusted wage and records an audit step per applied rule.
///
/// The numeric result is identical to [`adjusted_wage`]; both walk the same
/// adjustment schedule. One audit step is emitted for each date-gated stage
/// that fired, one for the annualization, and one for the annual bonus,
/// with `step_number` continuing from the given start.
///
/// # Arguments
///
/// * `base_fee` - The base monthly gross wage of the selected tier
/// * `month_index` - Zero-based offset into the observation window
/// * `mode` - How the resulting value is aggregated
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_adjusted_wage(
    base_fee: Decimal,
    month_index: i64,
    mode: AggregationMode,
    step_number: u32,
) -> AdjustedWageResult {
    let mut value = base_fee;
    let mut audit_steps = Vec::new();
    let mut step = step_number;

    for adjustment in &ADJUSTMENT_SCHEDULE {
        if month_index < adjustment.effective_index {
            continue;
        }

        let delta = adjustment.delta(base_fee);
        let previous = value;
        value += delta;

        audit_steps.push(AuditStep {
            step_number: step,
            rule_id: adjustment.rule_id.to_string(),
            rule_name: adjustment.rule_name.to_string(),
            clause_ref: adjustment.clause_ref.to_string(),
            input: serde_json::json!({
                "base_fee": base_fee.normalize().to_string(),
                "month_index": month_index,
                "running_value": previous.normalize().to_string(),
            }),
            output: serde_json::json!({
                "delta": delta.normalize().to_string(),
                "running_value": value.normalize().to_string(),
            }),
            reasoning: format!(
                "{} + {} = {} ({})",
                previous.normalize(),
                delta.normalize(),
                value.normalize(),
                adjustment.rule_name
            ),
        });
        step += 1;
    }

    if mode.is_annualized() {
        let monthly = value;
        value *= months_per_year();

        audit_steps.push(AuditStep {
            step_number: step,
            rule_id: "annualization".to_string(),
            rule_name: "Annualisierung".to_string(),
            clause_ref: "§ 1 Abs. 2".to_string(),
            input: serde_json::json!({
                "monthly_value": monthly.normalize().to_string(),
            }),
            output: serde_json::json!({
                "yearly_value": value.normalize().to_string(),
            }),
            reasoning: format!(
                "{} x 12 = {}",
                monthly.normalize(),
                value.normalize()
            ),
        });
        step += 1;
    }

    if mode == AggregationMode::YearlyWithBonus {
        let bonus = annual_bonus_rate() * base_fee;
        let previous = value;
        value += bonus;

        audit_steps.push(AuditStep {
            step_number: step,
            rule_id: "annual_bonus".to_string(),
            rule_name: "Jahressonderzahlung".to_string(),
            clause_ref: "§ 3".to_string(),
            input: serde_json::json!({
                "base_fee": base_fee.normalize().to_string(),
                "bonus_rate": annual_bonus_rate().normalize().to_string(),
            }),
            output: serde_json::json!({
                "bonus": bonus.normalize().to_string(),
                "yearly_value": value.normalize().to_string(),
            }),
            reasoning: format!(
                "{} + {} x {} = {}",
                previous.normalize(),
                annual_bonus_rate().normalize(),
                base_fee.normalize(),
                value.normalize()
            ),
        });
    }

    AdjustedWageResult {
        amount: value,
        audit_steps,
    }
}
