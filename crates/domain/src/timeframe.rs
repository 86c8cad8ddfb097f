// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift time windows and the calendar math built on them.
//!
//! A [`TimeWindow`] is the scheduled span of a shift: a calendar date plus
//! start and end clock times. Windows ending at or before their start time
//! are treated as crossing midnight into the next day.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, PrimitiveDateTime, Time};

/// Canonical date format used in persisted documents and requests.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Canonical clock-time format used in persisted documents and requests.
pub const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// Minimum rest gap required between two shifts on the same day.
///
/// A shift starting less than this long after another shift ends is
/// considered a scheduling conflict even though the two do not overlap.
pub const FOLLOW_ON_GAP: Duration = Duration::HOUR;

/// The scheduled span of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// The calendar date the shift starts on.
    pub date: Date,
    /// Scheduled start time.
    pub start: Time,
    /// Scheduled end time.
    pub end: Time,
}

impl TimeWindow {
    /// Returns the full start timestamp of the window.
    #[must_use]
    pub const fn start_at(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, self.start)
    }

    /// Returns the full end timestamp of the window.
    ///
    /// Windows whose end time is not after their start time roll over
    /// to the next calendar day.
    #[must_use]
    pub fn end_at(&self) -> PrimitiveDateTime {
        let same_day = PrimitiveDateTime::new(self.date, self.end);
        if self.end > self.start {
            same_day
        } else {
            same_day + Duration::DAY
        }
    }

    /// Returns true if the two windows share any span of time.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_at() < other.end_at() && self.end_at() > other.start_at()
    }

    /// Returns true if this window conflicts with an already-accepted one.
    ///
    /// A conflict is either an overlap, or this window starting within
    /// [`FOLLOW_ON_GAP`] after the accepted window ends.
    #[must_use]
    pub fn conflicts_with(&self, accepted: &Self) -> bool {
        if self.overlaps(accepted) {
            return true;
        }
        let gap: Duration = self.start_at() - accepted.end_at();
        gap >= Duration::ZERO && gap < FOLLOW_ON_GAP
    }

    /// Returns the scheduled length of the window.
    #[must_use]
    pub fn length(&self) -> Duration {
        self.end_at() - self.start_at()
    }
}

/// Parses a date in canonical `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string does not parse.
pub fn parse_date(s: &str) -> Result<Date, DomainError> {
    Date::parse(s, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: s.to_string(),
        error: e.to_string(),
    })
}

/// Parses a clock time in canonical `HH:MM` form.
///
/// # Errors
///
/// Returns `DomainError::TimeParseError` if the string does not parse.
pub fn parse_time(s: &str) -> Result<Time, DomainError> {
    Time::parse(s, TIME_FORMAT).map_err(|e| DomainError::TimeParseError {
        time_string: s.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date in canonical `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::FormatError` if formatting fails.
pub fn format_date(date: Date) -> Result<String, DomainError> {
    date.format(DATE_FORMAT)
        .map_err(|e| DomainError::FormatError(e.to_string()))
}

/// Formats a clock time in canonical `HH:MM` form.
///
/// # Errors
///
/// Returns `DomainError::FormatError` if formatting fails.
pub fn format_time(t: Time) -> Result<String, DomainError> {
    t.format(TIME_FORMAT)
        .map_err(|e| DomainError::FormatError(e.to_string()))
}
