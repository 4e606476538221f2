//! Vacation proration calculation.
//!
//! Given a reference month, a selected day and (for departures) a vacation
//! length, this module computes how many of the month's 30 notional days are
//! payable, and classifies the vacation period relative to the month.
//!
//! The caller is expected to feed the resulting day count into
//! [`crate::models::PayrollInput::days_worked`] and to block the main payroll
//! calculation while a request is still incomplete.

use crate::error::{EngineError, EngineResult};
use crate::models::{VacationCoverage, VacationMode, VacationProration, VacationRequest};

/// Days payable when no vacation touches the reference month.
const NOTIONAL_MONTH_DAYS: u32 = 30;

fn clamp_payable(days: i64) -> u32 {
    days.clamp(0, NOTIONAL_MONTH_DAYS as i64) as u32
}

/// Prorates the payable days of the reference month.
///
/// - `FullMonth` always yields 30 payable days and needs no other input.
/// - `Returning` interprets the day as the return date: the days before it
///   were vacation, so `30 − (day − 1)` are payable.
/// - `Departing` interprets the day as the vacation start and intersects the
///   span `[start, start + length − 1]` with the calendar month. A vacation
///   ending inside the month is a sandwich (`30 − overlap` payable); one
///   extending past the month end is a pure departure (`day − 1` payable).
///
/// A selected day past the month's last calendar day (say, day 31 in a
/// 30-day month) is clamped down before any arithmetic. Missing inputs
/// surface as the distinct [`EngineError`] variants rather than computing on
/// defaults.
///
/// # Examples
///
/// ```
/// use folha_engine::calculation::prorate_vacation;
/// use folha_engine::models::{
///     ReferenceMonth, VacationCoverage, VacationMode, VacationRequest,
/// };
///
/// let request = VacationRequest {
///     mode: VacationMode::Returning,
///     reference_month: Some(ReferenceMonth { year: 2026, month: 4 }),
///     day: Some(10),
///     vacation_days: None,
/// };
/// let result = prorate_vacation(&request).unwrap();
/// assert_eq!(result.payable_days, 21);
/// assert_eq!(result.coverage, VacationCoverage::Return);
/// ```
pub fn prorate_vacation(request: &VacationRequest) -> EngineResult<VacationProration> {
    if request.mode == VacationMode::FullMonth {
        return Ok(VacationProration {
            payable_days: NOTIONAL_MONTH_DAYS,
            coverage: VacationCoverage::FullMonth,
        });
    }

    let month = request
        .reference_month
        .ok_or(EngineError::MissingReferenceMonth)?;
    let last_day = month.last_day().ok_or(EngineError::MissingReferenceMonth)?;

    let day = match request.day {
        Some(day) if day > 0 => day,
        _ => return Err(EngineError::MissingVacationDay),
    };
    let day = day.min(last_day) as i64;

    match request.mode {
        VacationMode::FullMonth => unreachable!("handled above"),
        VacationMode::Returning => {
            let days_lost = day - 1;
            Ok(VacationProration {
                payable_days: clamp_payable(NOTIONAL_MONTH_DAYS as i64 - days_lost),
                coverage: VacationCoverage::Return,
            })
        }
        VacationMode::Departing => {
            let length = match request.vacation_days {
                Some(length) if length > 0 => length as i64,
                _ => return Err(EngineError::MissingVacationLength),
            };

            let vacation_end = day + length - 1;
            if vacation_end <= last_day as i64 {
                // Vacation ends inside the month: the employee returns to
                // work before month end.
                Ok(VacationProration {
                    payable_days: clamp_payable(NOTIONAL_MONTH_DAYS as i64 - length),
                    coverage: VacationCoverage::Sandwich,
                })
            } else {
                Ok(VacationProration {
                    payable_days: clamp_payable(day - 1),
                    coverage: VacationCoverage::PureDeparture,
                })
            }
        }
    }
}
