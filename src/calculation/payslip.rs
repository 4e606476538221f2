//! Monthly payslip orchestration.
//!
//! This module wires the individual calculation steps into the single
//! `calculate_payslip` entry point: earnings first, then the statutory and
//! contractual deductions, then totals, FGTS and net pay, with every decision
//! recorded in the audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::RuleSet;
use crate::models::{
    AuditTrace, AuditWarning, Deductions, Earnings, PayrollInput, Payslip,
};

use super::base_pay::calculate_base_pay;
use super::dsr::calculate_dsr;
use super::inss::calculate_inss;
use super::irrf::calculate_irrf;
use super::night_shift::calculate_night_shift;
use super::overtime::calculate_overtime;

/// The statutory FGTS deposit rate on gross pay.
pub const FGTS_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Computes a complete monthly payslip from an input record and a rule set.
///
/// The calculation is pure and idempotent apart from the result envelope's
/// identifier and timestamp: identical inputs always produce identical
/// earnings, deductions, FGTS and net figures. Negative numeric inputs are
/// clamped to zero before any formula runs, and every division in the
/// pipeline is either by a fixed non-zero legal divisor or explicitly
/// zero-guarded, so the result is always finite.
///
/// # Example
///
/// ```no_run
/// use folha_engine::calculation::calculate_payslip;
/// use folha_engine::config::RuleSetLoader;
/// use folha_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = RuleSetLoader::load("./config/2026.yaml").unwrap();
/// let input = PayrollInput {
///     salary: Decimal::from_str("3000.00").unwrap(),
///     days_worked: 30,
///     health_plan: "nenhum".to_string(),
///     ..PayrollInput::default()
/// };
/// let payslip = calculate_payslip(&input, loader.rules());
/// assert_eq!(payslip.earnings.gross_total, Decimal::from_str("3000.00").unwrap());
/// ```
pub fn calculate_payslip(input: &PayrollInput, rules: &RuleSet) -> Payslip {
    let calculation_id = Uuid::new_v4();
    let start_time = Instant::now();
    info!(
        calculation_id = %calculation_id,
        fiscal_year = rules.fiscal_year,
        "Calculating monthly payslip"
    );

    let input = input.sanitized();
    let mut steps = Vec::new();
    let mut warnings = Vec::new();

    // --- Earnings ---
    let base = calculate_base_pay(input.salary, input.days_worked, 1);
    if base.defaulted_to_full_month {
        warnings.push(AuditWarning {
            code: "DAYS_DEFAULTED".to_string(),
            message: "Days worked was zero or absent; defaulted to a full 30-day month"
                .to_string(),
            severity: "low".to_string(),
        });
    }

    let overtime = calculate_overtime(&input.overtime, base.hourly_rate, 2);
    let night = calculate_night_shift(input.night_shift_hours, base.hourly_rate, rules, 3);

    if input.working_days == Decimal::ZERO
        && (overtime.total > Decimal::ZERO || night.amount > Decimal::ZERO)
    {
        warnings.push(AuditWarning {
            code: "DSR_SKIPPED".to_string(),
            message: "Variable earnings present but working-day count is zero; DSR premiums \
                      were not computed"
                .to_string(),
            severity: "medium".to_string(),
        });
    }

    let dsr_overtime = calculate_dsr(
        overtime.total,
        input.working_days,
        input.rest_days,
        "overtime",
        4,
    );
    let dsr_night = calculate_dsr(
        night.amount,
        input.working_days,
        input.rest_days,
        "night_shift",
        5,
    );

    let mut earnings = Earnings {
        base_pay: base.base_pay,
        overtime_50: overtime.amount_50,
        overtime_60: overtime.amount_60,
        overtime_80: overtime.amount_80,
        overtime_100: overtime.amount_100,
        overtime_150: overtime.amount_150,
        night_shift: night.amount,
        dsr_overtime: dsr_overtime.amount,
        dsr_night_shift: dsr_night.amount,
        gross_total: Decimal::ZERO,
    };
    // Derived from line_sum() so the total stays bit-identical to the line
    // items at full Decimal precision; re-associating the sum here can drift
    // by one unit in the last place.
    earnings.gross_total = earnings.line_sum();
    let gross_total = earnings.gross_total;

    // --- Deductions ---
    let absences = input.absence_days * base.daily_rate;
    let tardiness = input.late_hours * base.hourly_rate;

    // The advance is computed from the same proportional base as the base
    // pay, independent of absences.
    let salary_advance = base.daily_rate * Decimal::from(base.effective_days) * rules.advance_rate;

    let meal_voucher = rules.meal_voucher_amount;
    let transport_voucher = if input.transport_voucher {
        input.salary * rules.transport_voucher_rate
    } else {
        Decimal::ZERO
    };

    // Contribution base: gross net of absence and tardiness losses. The
    // ceiling cap happens inside the bracket evaluator.
    let contribution_base = (gross_total - absences - tardiness).max(Decimal::ZERO);
    let inss = calculate_inss(contribution_base, rules, 6);
    let irrf = calculate_irrf(
        contribution_base,
        inss.contribution,
        input.dependents,
        gross_total,
        rules,
        7,
    );

    if !input.health_plan.is_empty() && !rules.health_plans.contains_key(&input.health_plan) {
        warnings.push(AuditWarning {
            code: "UNKNOWN_PLAN".to_string(),
            message: format!(
                "Health-plan key '{}' is not in the rule set; treated as zero cost",
                input.health_plan
            ),
            severity: "low".to_string(),
        });
    }
    let health_plan = rules.plan_price(&input.health_plan);
    let union_dues = if input.union_member {
        rules.union_dues_amount
    } else {
        Decimal::ZERO
    };
    let assistencial = input.assistencial_amount.unwrap_or(Decimal::ZERO);

    steps.push(base.audit_step);
    steps.push(overtime.audit_step);
    steps.push(night.audit_step);
    steps.push(dsr_overtime.audit_step);
    steps.push(dsr_night.audit_step);
    steps.push(inss.audit_step);
    steps.push(irrf.audit_step);

    let mut deductions = Deductions {
        absences,
        tardiness,
        health_plan,
        union_dues,
        loan: input.loan_amount,
        inss: inss.contribution,
        irrf: irrf.tax,
        salary_advance,
        meal_voucher,
        transport_voucher,
        assistencial,
        total: Decimal::ZERO,
    };
    deductions.total = deductions.line_sum();

    let fgts_deposit = gross_total * FGTS_RATE;
    let net_pay = gross_total - deductions.total;

    for warning in &warnings {
        warn!(
            calculation_id = %calculation_id,
            code = %warning.code,
            "{}", warning.message
        );
    }

    let duration_us = start_time.elapsed().as_micros() as u64;
    info!(
        calculation_id = %calculation_id,
        gross = %gross_total,
        net = %net_pay,
        duration_us,
        "Payslip calculated"
    );

    Payslip {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        earnings,
        deductions,
        fgts_deposit,
        net_pay,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleSetLoader;
    use crate::models::OvertimeHours;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn load_rules() -> RuleSet {
        RuleSetLoader::load("./config/2026.yaml")
            .expect("Failed to load rules")
            .rules()
            .clone()
    }

    fn plain_input(salary: &str) -> PayrollInput {
        PayrollInput {
            salary: dec(salary),
            days_worked: 30,
            health_plan: "nenhum".to_string(),
            ..PayrollInput::default()
        }
    }

    // ==========================================================================
    // PAY-001: plain 3000.00 salary, nothing else
    // ==========================================================================
    #[test]
    fn test_pay_001_plain_salary() {
        let rules = load_rules();
        let payslip = calculate_payslip(&plain_input("3000.00"), &rules);

        assert_eq!(payslip.earnings.base_pay, dec("3000.00"));
        assert_eq!(payslip.earnings.gross_total, dec("3000.00"));

        // INSS third bracket: 3000 × 0.12 − 106.59 = 253.41
        assert_eq!(payslip.deductions.inss, dec("253.41"));
        // Gross is under the 5000.00 exemption ceiling.
        assert_eq!(payslip.deductions.irrf, Decimal::ZERO);
        // FGTS is 8% of gross, not withheld.
        assert_eq!(payslip.fgts_deposit, dec("240.0000"));
    }

    // ==========================================================================
    // PAY-002: deduction lines always sum to the reported total
    // ==========================================================================
    #[test]
    fn test_pay_002_deduction_lines_sum_to_total() {
        let rules = load_rules();
        let input = PayrollInput {
            salary: dec("4500.00"),
            days_worked: 28,
            dependents: 2,
            absence_days: dec("1"),
            late_hours: dec("2.5"),
            overtime: OvertimeHours {
                at_50: dec("6"),
                at_100: dec("2"),
                ..OvertimeHours::default()
            },
            night_shift_hours: dec("12"),
            health_plan: "basico_familiar".to_string(),
            union_member: true,
            loan_amount: dec("150.00"),
            assistencial_amount: Some(dec("25.00")),
            working_days: dec("24"),
            rest_days: dec("4"),
            transport_voucher: true,
        };

        let payslip = calculate_payslip(&input, &rules);

        assert_eq!(payslip.deductions.total, payslip.deductions.line_sum());
        assert_eq!(
            payslip.net_pay,
            payslip.earnings.gross_total - payslip.deductions.total
        );
        assert_eq!(payslip.earnings.gross_total, payslip.earnings.line_sum());
    }

    #[test]
    fn test_gross_total_matches_line_sum_at_precision_limits() {
        // A fractional working-day count drives the DSR division to the full
        // 28-digit Decimal precision, where re-associating the earnings sum
        // drifts by one unit in the last place. The total must still equal
        // the line items exactly.
        let rules = load_rules();
        let input = PayrollInput {
            salary: dec("12668.29"),
            days_worked: 30,
            overtime: OvertimeHours {
                at_50: dec("18.69"),
                at_100: dec("35.56"),
                ..OvertimeHours::default()
            },
            working_days: dec("0.44"),
            rest_days: dec("5"),
            health_plan: "nenhum".to_string(),
            ..PayrollInput::default()
        };

        let payslip = calculate_payslip(&input, &rules);

        assert_eq!(payslip.earnings.gross_total, payslip.earnings.line_sum());
        assert_eq!(
            payslip.net_pay,
            payslip.earnings.gross_total - payslip.deductions.total
        );
    }

    // ==========================================================================
    // PAY-003: zero days worked defaults to a full month with a warning
    // ==========================================================================
    #[test]
    fn test_pay_003_zero_days_defaults_with_warning() {
        let rules = load_rules();
        let input = PayrollInput {
            days_worked: 0,
            ..plain_input("3000.00")
        };

        let payslip = calculate_payslip(&input, &rules);

        assert_eq!(payslip.earnings.base_pay, dec("3000.00"));
        assert!(payslip
            .audit_trace
            .warnings
            .iter()
            .any(|w| w.code == "DAYS_DEFAULTED"));
    }

    // ==========================================================================
    // PAY-004: advance ignores absences
    // ==========================================================================
    #[test]
    fn test_pay_004_advance_independent_of_absences() {
        let rules = load_rules();
        let with_absences = PayrollInput {
            absence_days: dec("5"),
            ..plain_input("3000.00")
        };

        let clean = calculate_payslip(&plain_input("3000.00"), &rules);
        let absent = calculate_payslip(&with_absences, &rules);

        assert_eq!(clean.deductions.salary_advance, absent.deductions.salary_advance);
        // 100.00 × 30 × 0.4 = 1200
        assert_eq!(clean.deductions.salary_advance, dec("1200.000"));
    }

    // ==========================================================================
    // PAY-005: absences and tardiness shrink the contribution base
    // ==========================================================================
    #[test]
    fn test_pay_005_contribution_base_net_of_losses() {
        let rules = load_rules();
        let input = PayrollInput {
            absence_days: dec("5"),
            ..plain_input("3000.00")
        };

        let payslip = calculate_payslip(&input, &rules);

        // Base 3000 − 500 = 2500, second INSS bracket:
        // 2500 × 0.09 − 22.77 = 202.23
        assert_eq!(payslip.deductions.absences, dec("500.00"));
        assert_eq!(payslip.deductions.inss, dec("202.23"));
    }

    // ==========================================================================
    // PAY-006: unknown plan key costs zero and warns
    // ==========================================================================
    #[test]
    fn test_pay_006_unknown_plan_key() {
        let rules = load_rules();
        let input = PayrollInput {
            health_plan: "plano_fantasma".to_string(),
            ..plain_input("3000.00")
        };

        let payslip = calculate_payslip(&input, &rules);

        assert_eq!(payslip.deductions.health_plan, Decimal::ZERO);
        assert!(payslip
            .audit_trace
            .warnings
            .iter()
            .any(|w| w.code == "UNKNOWN_PLAN"));
    }

    // ==========================================================================
    // PAY-007: identical inputs yield identical figures
    // ==========================================================================
    #[test]
    fn test_pay_007_idempotent_figures() {
        let rules = load_rules();
        let input = PayrollInput {
            overtime: OvertimeHours {
                at_50: dec("8"),
                ..OvertimeHours::default()
            },
            working_days: dec("25"),
            rest_days: dec("5"),
            ..plain_input("3517.43")
        };

        let first = calculate_payslip(&input, &rules);
        let second = calculate_payslip(&input, &rules);

        assert_eq!(first.earnings, second.earnings);
        assert_eq!(first.deductions, second.deductions);
        assert_eq!(first.fgts_deposit, second.fgts_deposit);
        assert_eq!(first.net_pay, second.net_pay);
    }

    // ==========================================================================
    // PAY-008: all-zero input degrades to an all-zero-ish payslip
    // ==========================================================================
    #[test]
    fn test_pay_008_empty_input_stays_finite() {
        let rules = load_rules();
        let payslip = calculate_payslip(&PayrollInput::default(), &rules);

        assert_eq!(payslip.earnings.gross_total, Decimal::ZERO);
        assert_eq!(payslip.deductions.inss, Decimal::ZERO);
        assert_eq!(payslip.deductions.irrf, Decimal::ZERO);
        // The fixed meal voucher still applies, driving net negative; that is
        // the expected preview for an empty form.
        assert_eq!(payslip.deductions.total, rules.meal_voucher_amount);
        assert_eq!(payslip.net_pay, -rules.meal_voucher_amount);
    }

    // ==========================================================================
    // PAY-009: DSR premiums flow into gross and tax bases
    // ==========================================================================
    #[test]
    fn test_pay_009_dsr_in_gross() {
        let rules = load_rules();
        let input = PayrollInput {
            salary: dec("2200.00"),
            days_worked: 30,
            overtime: OvertimeHours {
                at_50: dec("10"),
                ..OvertimeHours::default()
            },
            working_days: dec("25"),
            rest_days: dec("5"),
            health_plan: "nenhum".to_string(),
            ..PayrollInput::default()
        };

        let payslip = calculate_payslip(&input, &rules);

        // Hourly 10.00; overtime 10 × 10 × 1.5 = 150; DSR 150 / 25 × 5 = 30.
        assert_eq!(payslip.earnings.overtime_50, dec("150.0"));
        assert_eq!(payslip.earnings.dsr_overtime, dec("30.0"));
        assert_eq!(payslip.earnings.gross_total, dec("2380.0"));
    }

    // ==========================================================================
    // PAY-010: transport voucher applies on the full salary when opted in
    // ==========================================================================
    #[test]
    fn test_pay_010_transport_voucher() {
        let rules = load_rules();
        let opted_in = PayrollInput {
            transport_voucher: true,
            ..plain_input("3000.00")
        };

        let with_vt = calculate_payslip(&opted_in, &rules);
        let without_vt = calculate_payslip(&plain_input("3000.00"), &rules);

        assert_eq!(with_vt.deductions.transport_voucher, dec("180.0000"));
        assert_eq!(without_vt.deductions.transport_voucher, Decimal::ZERO);
    }

    #[test]
    fn test_audit_trace_has_seven_steps_in_order() {
        let rules = load_rules();
        let payslip = calculate_payslip(&plain_input("3000.00"), &rules);

        let numbers: Vec<u32> = payslip
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_dsr_skipped_warning_on_zero_working_days() {
        let rules = load_rules();
        let input = PayrollInput {
            overtime: OvertimeHours {
                at_50: dec("8"),
                ..OvertimeHours::default()
            },
            working_days: Decimal::ZERO,
            rest_days: dec("5"),
            ..plain_input("3000.00")
        };

        let payslip = calculate_payslip(&input, &rules);

        assert_eq!(payslip.earnings.dsr_overtime, Decimal::ZERO);
        assert!(payslip
            .audit_trace
            .warnings
            .iter()
            .any(|w| w.code == "DSR_SKIPPED"));
    }

    #[test]
    fn test_engine_version_stamped() {
        let rules = load_rules();
        let payslip = calculate_payslip(&plain_input("3000.00"), &rules);

        assert_eq!(payslip.engine_version, env!("CARGO_PKG_VERSION"));
    }
}
