//! Progressive INSS contribution evaluation.
//!
//! The contribution base is capped at the rule set's ceiling and then matched
//! against the ordered bracket table: the first bracket whose upper bound is
//! greater than or equal to the base wins, and the contribution is
//! `base × rate − subtract` for that bracket.

use rust_decimal::Decimal;

use crate::config::RuleSet;
use crate::models::AuditStep;

/// The result of an INSS contribution evaluation.
#[derive(Debug, Clone)]
pub struct InssResult {
    /// The base actually evaluated, after the zero floor and ceiling cap.
    pub capped_base: Decimal,
    /// The contribution amount.
    pub contribution: Decimal,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Evaluates the progressive INSS contribution for a base amount.
///
/// The base is floored at zero and clamped to the rule set's ceiling before
/// the bracket scan. Brackets are walked in ascending order with inclusive
/// upper bounds: a base exactly equal to a bound uses that bracket, not the
/// next one. A base exceeding every bound cannot occur after the cap, but if
/// it did, the last bracket's rate and subtraction would apply.
///
/// # Arguments
///
/// * `base` - The contribution base (gross minus absence and tardiness)
/// * `rules` - The fiscal-year rule set supplying the bracket table
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_inss(base: Decimal, rules: &RuleSet, step_number: u32) -> InssResult {
    let capped_base = base.max(Decimal::ZERO).min(rules.inss_ceiling);

    let bracket = rules
        .inss_brackets
        .iter()
        .find(|b| capped_base <= b.up_to)
        .or_else(|| rules.inss_brackets.last());

    let contribution = match bracket {
        Some(b) => capped_base * b.rate - b.subtract,
        None => Decimal::ZERO,
    };
    let contribution = contribution.max(Decimal::ZERO);

    let (rate, subtract) = bracket
        .map(|b| (b.rate, b.subtract))
        .unwrap_or((Decimal::ZERO, Decimal::ZERO));

    let audit_step = AuditStep {
        step_number,
        rule_id: "inss_contribution".to_string(),
        rule_name: "INSS Progressive Contribution".to_string(),
        legal_ref: "Lei 8.212 art. 28".to_string(),
        input: serde_json::json!({
            "base": base.normalize().to_string(),
            "ceiling": rules.inss_ceiling.normalize().to_string()
        }),
        output: serde_json::json!({
            "capped_base": capped_base.normalize().to_string(),
            "rate": rate.normalize().to_string(),
            "subtract": subtract.normalize().to_string(),
            "contribution": contribution.normalize().to_string()
        }),
        reasoning: format!(
            "INSS: {} × {} − {} = {}",
            capped_base.normalize(),
            rate.normalize(),
            subtract.normalize(),
            contribution.normalize()
        ),
    };

    InssResult {
        capped_base,
        contribution,
        audit_step,
    }
}
