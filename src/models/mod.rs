//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod payroll_input;
mod payslip;
mod vacation;

pub use payroll_input::{OvertimeHours, PayrollInput};
pub use payslip::{AuditStep, AuditTrace, AuditWarning, Deductions, Earnings, Payslip};
pub use vacation::{
    ReferenceMonth, VacationCoverage, VacationMode, VacationProration, VacationRequest,
};
