//! Progressive IRRF withholding evaluation.
//!
//! Two generations of the rule are representable through the rule set alone:
//!
//! - **Legacy** (no transition rule, or inactive): the taxable base is the
//!   adjusted gross minus the INSS contribution and the per-dependent
//!   deduction, evaluated against the bracket table.
//! - **Current (Lei 15.270)**: gross income up to the exemption ceiling pays
//!   zero tax outright; otherwise the more favorable of the legal and
//!   simplified bases feeds the bracket table, and gross income inside the
//!   transition band has a linear reducer subtracted from the result.
//!
//! The dispatch happens purely on the rule set's transition sub-record; no
//! caller ever branches on the rule generation.

use rust_decimal::Decimal;

use crate::config::RuleSet;
use crate::models::AuditStep;

/// The result of an IRRF evaluation.
#[derive(Debug, Clone)]
pub struct IrrfResult {
    /// The base that fed the bracket table (zero when fully exempt).
    pub taxable_base: Decimal,
    /// The withheld tax, floored at zero.
    pub tax: Decimal,
    /// True when the gross-income exemption ceiling zeroed the tax outright.
    pub exempt: bool,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Walks the IRRF bracket table for a taxable base.
///
/// Same first-match-wins ascending scan as the INSS table, with the final
/// bracket matching on its unbounded sentinel instead of a numeric bound.
fn bracket_tax(taxable_base: Decimal, rules: &RuleSet) -> Decimal {
    for bracket in &rules.irrf_brackets {
        match bracket.up_to {
            Some(bound) if taxable_base > bound => continue,
            _ => return taxable_base * bracket.rate - bracket.subtract,
        }
    }
    Decimal::ZERO
}

/// Evaluates the IRRF withholding for the month.
///
/// # Arguments
///
/// * `base` - The adjusted gross (pre-INSS contribution base)
/// * `inss` - The INSS contribution already computed for the month
/// * `dependents` - Number of IRRF dependents
/// * `gross_total` - The full gross total, which drives the exemption and
///   reducer checks regardless of the deduction-adjusted base
/// * `rules` - The fiscal-year rule set
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_irrf(
    base: Decimal,
    inss: Decimal,
    dependents: u32,
    gross_total: Decimal,
    rules: &RuleSet,
    step_number: u32,
) -> IrrfResult {
    let transition = rules.transition_rule.as_ref().filter(|t| t.active);

    // Outright exemption is decided on gross income, not on the
    // post-deduction base.
    if let Some(t) = transition {
        if gross_total <= t.gross_exemption_ceiling {
            let audit_step = AuditStep {
                step_number,
                rule_id: "irrf_withholding".to_string(),
                rule_name: "IRRF Withholding".to_string(),
                legal_ref: "Lei 15.270".to_string(),
                input: serde_json::json!({
                    "gross_total": gross_total.normalize().to_string(),
                    "exemption_ceiling": t.gross_exemption_ceiling.normalize().to_string()
                }),
                output: serde_json::json!({
                    "tax": "0",
                    "exempt": true
                }),
                reasoning: format!(
                    "Gross {} within the {} exemption ceiling; no IRRF withheld",
                    gross_total.normalize(),
                    t.gross_exemption_ceiling.normalize()
                ),
            };
            return IrrfResult {
                taxable_base: Decimal::ZERO,
                tax: Decimal::ZERO,
                exempt: true,
                audit_step,
            };
        }
    }

    let dependents_deduction = Decimal::from(dependents) * rules.dependent_deduction;
    let legal_base = base - inss - dependents_deduction;

    let taxable_base = match transition {
        Some(_) => {
            // The simplified option replaces every legal deduction with one
            // flat amount; the taxpayer gets whichever base is smaller.
            let simplified_base = base - rules.simplified_deduction;
            legal_base.min(simplified_base)
        }
        None => legal_base,
    };
    let taxable_base = taxable_base.max(Decimal::ZERO);

    let provisional_tax = bracket_tax(taxable_base, rules);

    let mut tax = provisional_tax;
    let mut reducer_applied = Decimal::ZERO;
    if let Some(t) = transition {
        if gross_total > t.gross_exemption_ceiling && gross_total <= t.transition_band_end {
            let reducer = t.reduction_intercept - t.reduction_factor * gross_total;
            if reducer > Decimal::ZERO {
                tax -= reducer;
                reducer_applied = reducer;
            }
        }
    }
    let tax = tax.max(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "irrf_withholding".to_string(),
        rule_name: "IRRF Withholding".to_string(),
        legal_ref: if transition.is_some() {
            "Lei 15.270".to_string()
        } else {
            "RIR/2018 art. 677".to_string()
        },
        input: serde_json::json!({
            "base": base.normalize().to_string(),
            "inss": inss.normalize().to_string(),
            "dependents": dependents,
            "gross_total": gross_total.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxable_base": taxable_base.normalize().to_string(),
            "provisional_tax": provisional_tax.normalize().to_string(),
            "reducer": reducer_applied.normalize().to_string(),
            "tax": tax.normalize().to_string(),
            "exempt": false
        }),
        reasoning: format!(
            "IRRF on base {}: bracket tax {}, reducer {}, withheld {}",
            taxable_base.normalize(),
            provisional_tax.normalize(),
            reducer_applied.normalize(),
            tax.normalize()
        ),
    };

    IrrfResult {
        taxable_base,
        tax,
        exempt: false,
        audit_step,
    }
}
