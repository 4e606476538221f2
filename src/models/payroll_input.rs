//! Payroll input model.
//!
//! This module defines the [`PayrollInput`] record supplied by the caller for
//! each monthly calculation, along with the [`OvertimeHours`] buckets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overtime hours worked in the month, split by premium bucket.
///
/// Each bucket carries a fixed legal multiplier (150% through 250% of the
/// hourly rate); the multipliers themselves live in the calculation module
/// as domain constants, not in the rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeHours {
    /// Hours paid at the 50% premium (multiplier 1.5).
    pub at_50: Decimal,
    /// Hours paid at the 60% premium (multiplier 1.6).
    pub at_60: Decimal,
    /// Hours paid at the 80% premium (multiplier 1.8).
    pub at_80: Decimal,
    /// Hours paid at the 100% premium (multiplier 2.0).
    pub at_100: Decimal,
    /// Hours paid at the 150% premium (multiplier 2.5).
    pub at_150: Decimal,
}

/// The timesheet-style input record for one monthly payslip calculation.
///
/// Every field defaults to zero/false/empty so a partially-filled form still
/// deserializes and produces a best-effort preview. The engine additionally
/// clamps negative values to zero through [`PayrollInput::sanitized`]; a
/// malformed numeric field must never abort the calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollInput {
    /// Base monthly salary.
    pub salary: Decimal,
    /// Days worked in the period (1-30). Zero means "full month" and is
    /// defaulted to 30 by the engine.
    pub days_worked: u32,
    /// Number of IRRF dependents.
    pub dependents: u32,
    /// Unjustified absence days deducted at the daily rate.
    pub absence_days: Decimal,
    /// Tardiness hours deducted at the hourly rate.
    pub late_hours: Decimal,
    /// Overtime hours per premium bucket.
    pub overtime: OvertimeHours,
    /// Night-shift hours paid at the rule set's night premium rate.
    pub night_shift_hours: Decimal,
    /// Selected health-plan key; unknown keys cost zero.
    pub health_plan: String,
    /// Whether union dues are withheld this month.
    pub union_member: bool,
    /// Outstanding loan installment withheld this month.
    pub loan_amount: Decimal,
    /// Optional direct assistencial contribution, a line item distinct from
    /// union dues.
    pub assistencial_amount: Option<Decimal>,
    /// Working days in the period, used for DSR proration.
    pub working_days: Decimal,
    /// Sundays and holidays in the period, used for DSR proration.
    pub rest_days: Decimal,
    /// Whether the transport-voucher deduction applies.
    pub transport_voucher: bool,
}

fn non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}

impl PayrollInput {
    /// Returns a copy with every negative numeric field clamped to zero.
    ///
    /// Numeric parsing and defaulting is the caller's job, but the engine
    /// still refuses to let a negative-looking value flow into the formulas.
    pub fn sanitized(&self) -> PayrollInput {
        PayrollInput {
            salary: non_negative(self.salary),
            days_worked: self.days_worked.min(30),
            dependents: self.dependents,
            absence_days: non_negative(self.absence_days),
            late_hours: non_negative(self.late_hours),
            overtime: OvertimeHours {
                at_50: non_negative(self.overtime.at_50),
                at_60: non_negative(self.overtime.at_60),
                at_80: non_negative(self.overtime.at_80),
                at_100: non_negative(self.overtime.at_100),
                at_150: non_negative(self.overtime.at_150),
            },
            night_shift_hours: non_negative(self.night_shift_hours),
            health_plan: self.health_plan.clone(),
            union_member: self.union_member,
            loan_amount: non_negative(self.loan_amount),
            assistencial_amount: self.assistencial_amount.map(non_negative),
            working_days: non_negative(self.working_days),
            rest_days: non_negative(self.rest_days),
            transport_voucher: self.transport_voucher,
        }
    }
}
