//! Base pay and reference rate calculation.
//!
//! This module derives the daily and hourly reference rates from the monthly
//! salary and computes the proportional base pay for the days worked in the
//! period.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The notional number of days in a payroll month.
///
/// Brazilian payroll always divides the monthly salary by 30, regardless of
/// the calendar length of the month.
pub const MONTHLY_DAYS_DIVISOR: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// The legal divisor for deriving the hourly rate from the monthly salary.
///
/// 220 hours corresponds to the constitutional 44-hour work week; it is a
/// fixed constant, never derived from the days in the month.
pub const MONTHLY_HOURS_DIVISOR: Decimal = Decimal::from_parts(220, 0, 0, false, 0);

/// Days payable when the input does not restrict the period.
pub const FULL_MONTH_DAYS: u32 = 30;

/// The result of the base pay calculation, including the reference rates
/// reused by every later step.
#[derive(Debug, Clone)]
pub struct BasePayResult {
    /// Salary divided by the 30-day notional month.
    pub daily_rate: Decimal,
    /// Salary divided by the 220-hour legal divisor.
    pub hourly_rate: Decimal,
    /// Daily rate times the effective days worked.
    pub base_pay: Decimal,
    /// The days actually charged, after the full-month default.
    pub effective_days: u32,
    /// True when a zero days-worked input was defaulted to 30.
    pub defaulted_to_full_month: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the proportional base pay for the period.
///
/// A zero `days_worked` is treated as a full 30-day month. This is a safety
/// default for an absent input, not a business assertion: it can mask a
/// genuine zero-day month, so the result flags it and the orchestrator
/// surfaces a warning.
///
/// # Arguments
///
/// * `salary` - The base monthly salary
/// * `days_worked` - Days worked in the period (0 means full month)
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_base_pay(salary: Decimal, days_worked: u32, step_number: u32) -> BasePayResult {
    let daily_rate = salary / MONTHLY_DAYS_DIVISOR;
    let hourly_rate = salary / MONTHLY_HOURS_DIVISOR;

    let defaulted_to_full_month = days_worked == 0;
    let effective_days = if defaulted_to_full_month {
        FULL_MONTH_DAYS
    } else {
        days_worked
    };

    let base_pay = daily_rate * Decimal::from(effective_days);

    let reasoning = if defaulted_to_full_month {
        format!(
            "Days worked absent; defaulted to full month: {} / 30 × 30 = {}",
            salary.normalize(),
            base_pay.normalize()
        )
    } else {
        format!(
            "Proportional base pay: {} / 30 × {} = {}",
            salary.normalize(),
            effective_days,
            base_pay.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_pay".to_string(),
        rule_name: "Proportional Base Pay".to_string(),
        legal_ref: "CLT art. 64".to_string(),
        input: serde_json::json!({
            "salary": salary.normalize().to_string(),
            "days_worked": days_worked
        }),
        output: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "effective_days": effective_days,
            "base_pay": base_pay.normalize().to_string()
        }),
        reasoning,
    };

    BasePayResult {
        daily_rate,
        hourly_rate,
        base_pay,
        effective_days,
        defaulted_to_full_month,
        audit_step,
    }
}
