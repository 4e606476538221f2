//! Paid-rest-day (DSR) premium calculation.
//!
//! Variable earnings (overtime, night premium) generate a proportional
//! premium over the period's paid rest days: the variable amount is averaged
//! over the working days and paid once more for each Sunday/holiday.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of a DSR premium calculation.
#[derive(Debug, Clone)]
pub struct DsrResult {
    /// The premium: `variable pay / working days × rest days`.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the DSR premium over a variable earnings amount.
///
/// A zero working-day count yields a zero premium. That is a deliberate
/// fallback guarding the division, not an error: a partially-filled form
/// must still produce a preview.
///
/// # Arguments
///
/// * `variable_pay` - The variable earnings the premium derives from
/// * `working_days` - Working days in the period
/// * `rest_days` - Sundays and holidays in the period
/// * `source` - Which earnings feed this premium ("overtime" or "night_shift")
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_dsr(
    variable_pay: Decimal,
    working_days: Decimal,
    rest_days: Decimal,
    source: &str,
    step_number: u32,
) -> DsrResult {
    let amount = if working_days > Decimal::ZERO {
        variable_pay / working_days * rest_days
    } else {
        Decimal::ZERO
    };

    let reasoning = if working_days > Decimal::ZERO {
        format!(
            "DSR on {}: {} / {} × {} = {}",
            source,
            variable_pay.normalize(),
            working_days.normalize(),
            rest_days.normalize(),
            amount.normalize()
        )
    } else {
        format!("DSR on {} skipped: no working days in period", source)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: format!("dsr_{}", source),
        rule_name: "Paid-Rest-Day Premium".to_string(),
        legal_ref: "Lei 605/1949 art. 7".to_string(),
        input: serde_json::json!({
            "source": source,
            "variable_pay": variable_pay.normalize().to_string(),
            "working_days": working_days.normalize().to_string(),
            "rest_days": rest_days.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    DsrResult { amount, audit_step }
}
