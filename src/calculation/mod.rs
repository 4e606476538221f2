//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for determining a
//! monthly payslip, including proportional base pay, tiered overtime, the
//! night-shift premium, paid-rest-day (DSR) premiums over variable earnings,
//! the progressive INSS contribution, the IRRF withholding with its
//! Lei 15.270 transition handling, vacation proration of payable days, and
//! the payslip orchestration that ties the steps together.

mod base_pay;
mod dsr;
mod inss;
mod irrf;
mod night_shift;
mod overtime;
mod payslip;
mod vacation;

pub use base_pay::{
    BasePayResult, FULL_MONTH_DAYS, MONTHLY_DAYS_DIVISOR, MONTHLY_HOURS_DIVISOR,
    calculate_base_pay,
};
pub use dsr::{DsrResult, calculate_dsr};
pub use inss::{InssResult, calculate_inss};
pub use irrf::{IrrfResult, calculate_irrf};
pub use night_shift::{NightShiftResult, calculate_night_shift};
pub use overtime::{
    OVERTIME_MULTIPLIER_50, OVERTIME_MULTIPLIER_60, OVERTIME_MULTIPLIER_80,
    OVERTIME_MULTIPLIER_100, OVERTIME_MULTIPLIER_150, OvertimeResult, calculate_overtime,
};
pub use payslip::{FGTS_RATE, calculate_payslip};
pub use vacation::prorate_vacation;
