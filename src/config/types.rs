//! Rule set types for payroll calculation.
//!
//! This module contains the strongly-typed fiscal-year rule structures that
//! are deserialized from YAML rule files. A [`RuleSet`] is immutable once
//! loaded and is passed by reference into every engine call, so multiple
//! fiscal years can coexist (e.g., for testing prior years).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single bracket of the progressive INSS contribution table.
///
/// The contribution for a base falling in this bracket is
/// `base * rate - subtract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InssBracket {
    /// The inclusive upper bound of this bracket.
    pub up_to: Decimal,
    /// The contribution rate applied to the whole base.
    pub rate: Decimal,
    /// The fixed amount subtracted from `base * rate`.
    pub subtract: Decimal,
}

/// A single bracket of the progressive IRRF withholding table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrfBracket {
    /// The inclusive upper bound of this bracket, or `None` for the final
    /// unbounded bracket.
    #[serde(default)]
    pub up_to: Option<Decimal>,
    /// The withholding rate applied to the whole base.
    pub rate: Decimal,
    /// The fixed amount subtracted from `base * rate`.
    pub subtract: Decimal,
}

/// The transitional IRRF reduction rule introduced by Lei 15.270.
///
/// When active, gross income up to `gross_exemption_ceiling` pays no IRRF at
/// all, and gross income strictly between the ceiling and
/// `transition_band_end` has a linear reducer
/// `reduction_intercept - reduction_factor * gross` subtracted from the
/// bracket-table tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRule {
    /// Whether the transition rule is in force for this fiscal year.
    pub active: bool,
    /// Gross income up to this value is fully exempt.
    pub gross_exemption_ceiling: Decimal,
    /// Upper bound of the gross-income band where the reducer applies.
    pub transition_band_end: Decimal,
    /// Linear coefficient of the reducer formula.
    pub reduction_factor: Decimal,
    /// Fixed intercept of the reducer formula.
    pub reduction_intercept: Decimal,
}

/// The complete rule set for one fiscal year, loaded from a YAML file.
///
/// All monetary values are [`Decimal`]. Bracket tables must be sorted
/// ascending by upper bound; [`RuleSet::validate`] enforces this invariant
/// and is called by the loader before a rule set is handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// The fiscal year these rules apply to (e.g., 2026).
    pub fiscal_year: i32,
    /// The national minimum monthly wage.
    pub minimum_wage: Decimal,
    /// The INSS contribution ceiling; bases above it are capped.
    pub inss_ceiling: Decimal,
    /// Salary-advance rate applied to the proportional base pay.
    pub advance_rate: Decimal,
    /// Night-shift premium rate applied per night hour.
    pub night_shift_rate: Decimal,
    /// Transport-voucher rate applied to the full salary when opted in.
    pub transport_voucher_rate: Decimal,
    /// Fixed monthly meal-voucher deduction.
    pub meal_voucher_amount: Decimal,
    /// Fixed monthly union dues, charged when the union flag is set.
    pub union_dues_amount: Decimal,
    /// Per-dependent IRRF deduction.
    pub dependent_deduction: Decimal,
    /// Constant used by the simplified IRRF deduction option.
    pub simplified_deduction: Decimal,
    /// Progressive INSS brackets, ascending by upper bound.
    pub inss_brackets: Vec<InssBracket>,
    /// Progressive IRRF brackets, ascending; the last entry is unbounded.
    pub irrf_brackets: Vec<IrrfBracket>,
    /// Transitional reduction rule, absent for legacy fiscal years.
    #[serde(default)]
    pub transition_rule: Option<TransitionRule>,
    /// Monthly price per health-plan key.
    pub health_plans: HashMap<String, Decimal>,
}

impl RuleSet {
    /// Returns the monthly price for a health-plan key.
    ///
    /// Unknown keys are treated as zero cost, never as an error: a payslip
    /// preview must still compute when the plan selector holds a stale value.
    pub fn plan_price(&self, key: &str) -> Decimal {
        self.health_plans.get(key).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns true when the transitional IRRF rule is present and active.
    pub fn transition_active(&self) -> bool {
        self.transition_rule.as_ref().is_some_and(|t| t.active)
    }

    /// Checks the structural invariants of the rule set.
    ///
    /// Verifies that both bracket tables are non-empty and sorted ascending
    /// by upper bound, and that only the final IRRF bracket may be unbounded.
    pub fn validate(&self) -> Result<(), String> {
        if self.inss_brackets.is_empty() {
            return Err("INSS bracket table is empty".to_string());
        }
        if self.irrf_brackets.is_empty() {
            return Err("IRRF bracket table is empty".to_string());
        }

        let mut previous = Decimal::MIN;
        for bracket in &self.inss_brackets {
            if bracket.up_to <= previous {
                return Err(format!(
                    "INSS brackets must be sorted ascending; {} follows {}",
                    bracket.up_to, previous
                ));
            }
            previous = bracket.up_to;
        }

        let last_index = self.irrf_brackets.len() - 1;
        let mut previous = Decimal::MIN;
        for (index, bracket) in self.irrf_brackets.iter().enumerate() {
            match bracket.up_to {
                Some(bound) => {
                    if bound <= previous {
                        return Err(format!(
                            "IRRF brackets must be sorted ascending; {} follows {}",
                            bound, previous
                        ));
                    }
                    previous = bound;
                }
                None if index != last_index => {
                    return Err(format!(
                        "IRRF bracket {} is unbounded but is not the final bracket",
                        index
                    ));
                }
                None => {}
            }
        }

        Ok(())
    }
}
