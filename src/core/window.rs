//! Date window resolution
//!
//! Turns "today" plus a day-count into the inclusive range of log dates to collect.

use chrono::{Datelike, Days, NaiveDate};

use crate::consts::{COMPACT_DATE_FORMAT, DATE_FORMAT, WORK_WEEK_DAYS};
use crate::error::AppError;

/// Inclusive calendar-date range, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateWindow {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    /// Set when the window is the Monday-Friday work week
    pub(crate) work_week: bool,
}

impl DateWindow {
    /// Resolve the window for a request issued on `today`.
    ///
    /// A 5-day request means the most recent complete work week: Monday to
    /// Thursday report on the previous week, Friday to Sunday on the current
    /// one. Any other count is a trailing window ending today.
    ///
    /// Counts that reach past the supported calendar range are rejected.
    pub(crate) fn resolve(today: NaiveDate, days: u32) -> Result<Self, AppError> {
        let out_of_range = || AppError::InvalidDays {
            input: i64::from(days),
        };

        if days == WORK_WEEK_DAYS {
            let weekday = u64::from(today.weekday().num_days_from_monday());
            let back = if weekday <= 3 { weekday + 7 } else { weekday };
            let monday = today
                .checked_sub_days(Days::new(back))
                .ok_or_else(out_of_range)?;
            let friday = monday
                .checked_add_days(Days::new(4))
                .ok_or_else(out_of_range)?;
            return Ok(Self {
                start: monday,
                end: friday,
                work_week: true,
            });
        }

        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(out_of_range)?;
        Ok(Self {
            start,
            end: today,
            work_week: false,
        })
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Human-readable range used in the bundle header and console output
    pub(crate) fn describe(&self, days: u32) -> String {
        if self.work_week {
            format!(
                "work week {} to {}",
                self.start.format(DATE_FORMAT),
                self.end.format(DATE_FORMAT)
            )
        } else {
            format!("past {days} days")
        }
    }

    /// `YYYYMMDD_to_YYYYMMDD`, embedded in output filenames
    pub(crate) fn file_tag(&self) -> String {
        format!(
            "{}_to_{}",
            self.start.format(COMPACT_DATE_FORMAT),
            self.end.format(COMPACT_DATE_FORMAT)
        )
    }
}

/// Validate a user-supplied day-count; zero and negative values are rejected.
pub(crate) fn validate_days(days: i64) -> Result<u32, AppError> {
    u32::try_from(days)
        .ok()
        .filter(|d| *d > 0)
        .ok_or(AppError::InvalidDays { input: days })
}
