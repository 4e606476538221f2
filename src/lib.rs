//! Payroll calculation engine for Brazilian CLT monthly payslips.
//!
//! This crate computes a full monthly payroll breakdown (gross pay, overtime,
//! night-shift premium, DSR, statutory deductions, INSS, IRRF, net pay and the
//! FGTS deposit) from a timesheet-style input record and an immutable
//! fiscal-year rule set. It also provides the calendar proration of payable
//! days for partial-month vacation periods.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
