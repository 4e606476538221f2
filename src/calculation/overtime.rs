//! Overtime bucket calculation.
//!
//! This module values the five overtime buckets at their fixed legal premium
//! multipliers. The multipliers are constants of the domain, not rule-set
//! configuration: a 50% overtime hour is worth 1.5 hourly rates in every
//! fiscal year.

use rust_decimal::Decimal;

use crate::models::{AuditStep, OvertimeHours};

/// Multiplier for the 50% overtime premium.
pub const OVERTIME_MULTIPLIER_50: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
/// Multiplier for the 60% overtime premium.
pub const OVERTIME_MULTIPLIER_60: Decimal = Decimal::from_parts(16, 0, 0, false, 1);
/// Multiplier for the 80% overtime premium.
pub const OVERTIME_MULTIPLIER_80: Decimal = Decimal::from_parts(18, 0, 0, false, 1);
/// Multiplier for the 100% overtime premium.
pub const OVERTIME_MULTIPLIER_100: Decimal = Decimal::from_parts(2, 0, 0, false, 0);
/// Multiplier for the 150% overtime premium.
pub const OVERTIME_MULTIPLIER_150: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// The result of valuing all overtime buckets.
#[derive(Debug, Clone)]
pub struct OvertimeResult {
    /// Amount for hours at the 50% premium.
    pub amount_50: Decimal,
    /// Amount for hours at the 60% premium.
    pub amount_60: Decimal,
    /// Amount for hours at the 80% premium.
    pub amount_80: Decimal,
    /// Amount for hours at the 100% premium.
    pub amount_100: Decimal,
    /// Amount for hours at the 150% premium.
    pub amount_150: Decimal,
    /// Sum of all five bucket amounts.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Values each overtime bucket as `hours × hourly rate × multiplier`.
///
/// # Arguments
///
/// * `hours` - Overtime hours per premium bucket
/// * `hourly_rate` - The salary-derived hourly reference rate
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_overtime(
    hours: &OvertimeHours,
    hourly_rate: Decimal,
    step_number: u32,
) -> OvertimeResult {
    let amount_50 = hours.at_50 * hourly_rate * OVERTIME_MULTIPLIER_50;
    let amount_60 = hours.at_60 * hourly_rate * OVERTIME_MULTIPLIER_60;
    let amount_80 = hours.at_80 * hourly_rate * OVERTIME_MULTIPLIER_80;
    let amount_100 = hours.at_100 * hourly_rate * OVERTIME_MULTIPLIER_100;
    let amount_150 = hours.at_150 * hourly_rate * OVERTIME_MULTIPLIER_150;
    let total = amount_50 + amount_60 + amount_80 + amount_100 + amount_150;

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_buckets".to_string(),
        rule_name: "Overtime Premium Buckets".to_string(),
        legal_ref: "CLT art. 59".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "hours_50": hours.at_50.normalize().to_string(),
            "hours_60": hours.at_60.normalize().to_string(),
            "hours_80": hours.at_80.normalize().to_string(),
            "hours_100": hours.at_100.normalize().to_string(),
            "hours_150": hours.at_150.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount_50": amount_50.normalize().to_string(),
            "amount_60": amount_60.normalize().to_string(),
            "amount_80": amount_80.normalize().to_string(),
            "amount_100": amount_100.normalize().to_string(),
            "amount_150": amount_150.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "Overtime at fixed multipliers on hourly rate {}: total {}",
            hourly_rate.normalize(),
            total.normalize()
        ),
    };

    OvertimeResult {
        amount_50,
        amount_60,
        amount_80,
        amount_100,
        amount_150,
        total,
        audit_step,
    }
}
