// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validation applied before any store mutation.

use crate::error::DomainError;
use crate::timeframe::TimeWindow;
use rust_decimal::Decimal;

/// Validates the user-supplied fields of a new posting.
///
/// # Errors
///
/// Returns the first failing check: empty title, non-positive rate,
/// zero capacity, or a break longer than the scheduled shift.
pub fn validate_posting_fields(
    title: &str,
    hourly_rate: Decimal,
    capacity: u32,
    window: &TimeWindow,
    break_minutes: u32,
) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(
            "title must not be empty".to_string(),
        ));
    }

    if hourly_rate <= Decimal::ZERO {
        return Err(DomainError::InvalidHourlyRate(format!(
            "rate must be positive, got {hourly_rate}"
        )));
    }

    if capacity == 0 {
        return Err(DomainError::InvalidCapacity { capacity });
    }

    let shift_minutes = window.length().whole_minutes();
    if i64::from(break_minutes) >= shift_minutes {
        return Err(DomainError::InvalidBreak { break_minutes });
    }

    Ok(())
}

/// Validates a reported checkout span.
///
/// # Errors
///
/// Returns an error if the end does not fall after the start, or the
/// break swallows the whole span.
pub fn validate_checkout_span(
    start: time::Time,
    end: time::Time,
    break_minutes: u32,
) -> Result<(), DomainError> {
    let span_minutes = (end - start).whole_minutes();
    if span_minutes <= 0 {
        return Err(DomainError::InvalidTimeWindow {
            reason: "checkout end must fall after checkout start".to_string(),
        });
    }

    if i64::from(break_minutes) >= span_minutes {
        return Err(DomainError::InvalidBreak { break_minutes });
    }

    Ok(())
}
