//! Night-shift premium calculation.
//!
//! Night hours earn an additional premium on top of the normal hourly rate.
//! The premium rate is rule-set configuration (35% in 2026), unlike the fixed
//! overtime multipliers.

use rust_decimal::Decimal;

use crate::config::RuleSet;
use crate::models::AuditStep;

/// The result of the night-shift premium calculation.
#[derive(Debug, Clone)]
pub struct NightShiftResult {
    /// The premium amount: `hours × hourly rate × night premium rate`.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the night-shift premium amount.
///
/// # Arguments
///
/// * `night_hours` - Night-shift hours worked in the period
/// * `hourly_rate` - The salary-derived hourly reference rate
/// * `rules` - The fiscal-year rule set supplying the premium rate
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_night_shift(
    night_hours: Decimal,
    hourly_rate: Decimal,
    rules: &RuleSet,
    step_number: u32,
) -> NightShiftResult {
    let amount = night_hours * hourly_rate * rules.night_shift_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_shift_premium".to_string(),
        rule_name: "Night-Shift Premium".to_string(),
        legal_ref: "CLT art. 73".to_string(),
        input: serde_json::json!({
            "night_hours": night_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "premium_rate": rules.night_shift_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "Night premium: {} hours × {} × {} = {}",
            night_hours.normalize(),
            hourly_rate.normalize(),
            rules.night_shift_rate.normalize(),
            amount.normalize()
        ),
    };

    NightShiftResult { amount, audit_step }
}
