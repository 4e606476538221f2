//! Payslip result models.
//!
//! This module contains the [`Payslip`] type and its associated structures
//! that capture all outputs from a monthly payroll calculation: the earnings
//! and deductions breakdowns, the FGTS deposit, net pay, and the audit trace.
//!
//! A payslip is a pure derived value: it is created fresh per calculation,
//! never mutated, and never cached across calls. All values are plain
//! [`Decimal`] numbers; currency formatting belongs to the rendering layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The earnings side of a payslip.
///
/// `gross_total` is also the taxable-income figure consumed by the INSS and
/// IRRF evaluators downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earnings {
    /// Proportional base pay (daily rate times effective days worked).
    pub base_pay: Decimal,
    /// Overtime amount at the 50% premium.
    pub overtime_50: Decimal,
    /// Overtime amount at the 60% premium.
    pub overtime_60: Decimal,
    /// Overtime amount at the 80% premium.
    pub overtime_80: Decimal,
    /// Overtime amount at the 100% premium.
    pub overtime_100: Decimal,
    /// Overtime amount at the 150% premium.
    pub overtime_150: Decimal,
    /// Night-shift premium amount.
    pub night_shift: Decimal,
    /// Paid-rest-day premium derived from overtime earnings.
    pub dsr_overtime: Decimal,
    /// Paid-rest-day premium derived from the night-shift premium.
    pub dsr_night_shift: Decimal,
    /// Sum of every earnings line above.
    pub gross_total: Decimal,
}

/// The deductions side of a payslip.
///
/// `total` is always the exact sum of the individual lines; no deduction is
/// applied outside this record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Absence days charged at the daily rate.
    pub absences: Decimal,
    /// Tardiness hours charged at the hourly rate.
    pub tardiness: Decimal,
    /// Monthly price of the selected health plan.
    pub health_plan: Decimal,
    /// Union dues, when the union flag is set.
    pub union_dues: Decimal,
    /// Loan installment withheld this month.
    pub loan: Decimal,
    /// Social-security contribution (INSS).
    pub inss: Decimal,
    /// Withheld income tax (IRRF).
    pub irrf: Decimal,
    /// Salary advance already paid out mid-month.
    pub salary_advance: Decimal,
    /// Fixed meal-voucher deduction.
    pub meal_voucher: Decimal,
    /// Transport-voucher deduction, when opted in.
    pub transport_voucher: Decimal,
    /// Direct assistencial contribution, when provided.
    pub assistencial: Decimal,
    /// Sum of every deduction line above.
    pub total: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute or rule backing this step.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate defaults or fallbacks that did not prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a monthly payroll calculation.
///
/// # Example
///
/// ```
/// use folha_engine::models::{Payslip, Earnings, Deductions, AuditTrace};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let payslip = Payslip {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     earnings: Earnings::default(),
///     deductions: Deductions::default(),
///     fgts_deposit: Decimal::ZERO,
///     net_pay: Decimal::ZERO,
///     audit_trace: AuditTrace { steps: vec![], warnings: vec![], duration_us: 0 },
/// };
/// assert_eq!(payslip.net_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The earnings breakdown.
    pub earnings: Earnings,
    /// The deductions breakdown.
    pub deductions: Deductions,
    /// Statutory FGTS deposit (8% of gross), made on the employee's behalf
    /// and not withheld from net pay.
    pub fgts_deposit: Decimal,
    /// Gross total minus total deductions.
    pub net_pay: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl Earnings {
    /// Sums every earnings line except `gross_total` itself.
    pub fn line_sum(&self) -> Decimal {
        self.base_pay
            + self.overtime_50
            + self.overtime_60
            + self.overtime_80
            + self.overtime_100
            + self.overtime_150
            + self.night_shift
            + self.dsr_overtime
            + self.dsr_night_shift
    }
}

impl Deductions {
    /// Sums every deduction line except `total` itself.
    pub fn line_sum(&self) -> Decimal {
        self.absences
            + self.tardiness
            + self.health_plan
            + self.union_dues
            + self.loan
            + self.inss
            + self.irrf
            + self.salary_advance
            + self.meal_voucher
            + self.transport_voucher
            + self.assistencial
    }
}
