//! Vacation proration models.
//!
//! This module contains the request and result types consumed and produced
//! by the vacation proration calculator. The caller derives the payslip's
//! `days_worked` field from the [`VacationProration`] result before building
//! the payroll input.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar reference month (year plus month number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceMonth {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1 through 12.
    pub month: u32,
}

impl ReferenceMonth {
    /// Returns the last calendar day of this month, or `None` when the
    /// year/month pair is not a valid date.
    pub fn last_day(&self) -> Option<u32> {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)?
        };
        Some(next_month.pred_opt()?.day())
    }
}

/// The interpretation mode for a vacation proration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationMode {
    /// No vacation this month; the full 30 notional days are payable.
    FullMonth,
    /// The employee departs on vacation during the reference month. The
    /// selected day is the vacation start date and a vacation length is
    /// required.
    Departing,
    /// The employee returns from vacation during the reference month. The
    /// selected day is the return date.
    Returning,
}

/// A request to prorate the payable days of a reference month.
///
/// Optional fields are deliberate: the calculator reports which one is
/// missing so the caller can block the main payroll calculation until the
/// request is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequest {
    /// The interpretation mode.
    pub mode: VacationMode,
    /// The reference month; required unless the mode is `FullMonth`.
    #[serde(default)]
    pub reference_month: Option<ReferenceMonth>,
    /// The selected day of the month (start or return date depending on
    /// mode); required unless the mode is `FullMonth`.
    #[serde(default)]
    pub day: Option<u32>,
    /// Vacation length in days; required in `Departing` mode.
    #[serde(default)]
    pub vacation_days: Option<u32>,
}

/// Classifies how the vacation period relates to the reference month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationCoverage {
    /// No vacation overlapped the month.
    FullMonth,
    /// The employee returned from an earlier vacation during the month.
    Return,
    /// The vacation both started and ended inside the reference month.
    Sandwich,
    /// The vacation started in the month and extended beyond its end.
    PureDeparture,
}

impl fmt::Display for VacationCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VacationCoverage::FullMonth => "full month worked",
            VacationCoverage::Return => "return from vacation",
            VacationCoverage::Sandwich => "sandwich vacation",
            VacationCoverage::PureDeparture => "pure departure",
        };
        f.write_str(label)
    }
}

/// The result of a vacation proration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationProration {
    /// Days payable in the 30-day notional month, 0 through 30 inclusive.
    pub payable_days: u32,
    /// How the vacation period relates to the reference month.
    pub coverage: VacationCoverage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_day_of_31_day_month() {
        let month = ReferenceMonth {
            year: 2026,
            month: 1,
        };
        assert_eq!(month.last_day(), Some(31));
    }

    #[test]
    fn test_last_day_of_february_non_leap() {
        let month = ReferenceMonth {
            year: 2026,
            month: 2,
        };
        assert_eq!(month.last_day(), Some(28));
    }

    #[test]
    fn test_last_day_of_february_leap() {
        let month = ReferenceMonth {
            year: 2028,
            month: 2,
        };
        assert_eq!(month.last_day(), Some(29));
    }

    #[test]
    fn test_last_day_of_december() {
        let month = ReferenceMonth {
            year: 2026,
            month: 12,
        };
        assert_eq!(month.last_day(), Some(31));
    }

    #[test]
    fn test_last_day_of_invalid_month() {
        let month = ReferenceMonth {
            year: 2026,
            month: 13,
        };
        assert_eq!(month.last_day(), None);
    }

    #[test]
    fn test_coverage_display_labels() {
        assert_eq!(VacationCoverage::Sandwich.to_string(), "sandwich vacation");
        assert_eq!(
            VacationCoverage::PureDeparture.to_string(),
            "pure departure"
        );
        assert_eq!(
            VacationCoverage::Return.to_string(),
            "return from vacation"
        );
        assert_eq!(
            VacationCoverage::FullMonth.to_string(),
            "full month worked"
        );
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&VacationMode::Departing).unwrap();
        assert_eq!(json, "\"departing\"");

        let mode: VacationMode = serde_json::from_str("\"full_month\"").unwrap();
        assert_eq!(mode, VacationMode::FullMonth);
    }

    #[test]
    fn test_request_deserializes_without_optional_fields() {
        let json = r#"{ "mode": "full_month" }"#;
        let request: VacationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.mode, VacationMode::FullMonth);
        assert_eq!(request.reference_month, None);
        assert_eq!(request.day, None);
        assert_eq!(request.vacation_days, None);
    }
}
