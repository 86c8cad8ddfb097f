// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Posting title is empty or invalid.
    InvalidTitle(String),
    /// Hourly rate must be positive.
    InvalidHourlyRate(String),
    /// Capacity must be positive.
    InvalidCapacity {
        /// The invalid capacity value.
        capacity: u32,
    },
    /// Break minutes exceed the shift length.
    InvalidBreak {
        /// The invalid break value in minutes.
        break_minutes: u32,
    },
    /// Rating must be between 0 and 5.
    InvalidRating {
        /// The invalid rating value.
        rating: f64,
    },
    /// Shift time window is invalid.
    InvalidTimeWindow {
        /// Description of the validation error.
        reason: String,
    },
    /// Slot status string is not recognized.
    InvalidSlotStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// Posting status string is not recognized.
    InvalidPostingStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// A status transition is not permitted by the lifecycle rules.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is rejected.
        reason: String,
    },
    /// The posting is not accepting applications.
    PostingUnavailable {
        /// The posting identifier.
        posting_id: i64,
    },
    /// The worker has no pending application on the posting.
    NoApplication {
        /// The worker identifier.
        worker_id: i64,
        /// The posting identifier.
        posting_id: i64,
    },
    /// The slot has no assigned worker but the operation requires one.
    SlotUnassigned {
        /// The slot identifier.
        slot_id: i64,
    },
    /// The slot has no checkout record but the operation requires one.
    CheckoutMissing {
        /// The slot identifier.
        slot_id: i64,
    },
    /// Checkout end does not fall after checkout start.
    NonPositiveCheckoutDuration {
        /// The slot identifier.
        slot_id: i64,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a clock time from a string.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to format a date or time value.
    FormatError(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidHourlyRate(msg) => write!(f, "Invalid hourly rate: {msg}"),
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity: {capacity} (must be positive)")
            }
            Self::InvalidBreak { break_minutes } => {
                write!(
                    f,
                    "Invalid break: {break_minutes} minutes exceeds the shift length"
                )
            }
            Self::InvalidRating { rating } => {
                write!(f, "Invalid rating: {rating} (must be between 0 and 5)")
            }
            Self::InvalidTimeWindow { reason } => write!(f, "Invalid time window: {reason}"),
            Self::InvalidSlotStatus { status } => {
                write!(f, "Invalid slot status: {status}")
            }
            Self::InvalidPostingStatus { status } => {
                write!(f, "Invalid posting status: {status}")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Invalid status transition from {from} to {to}: {reason}")
            }
            Self::PostingUnavailable { posting_id } => {
                write!(f, "Posting {posting_id} is not accepting applications")
            }
            Self::NoApplication {
                worker_id,
                posting_id,
            } => {
                write!(
                    f,
                    "Worker {worker_id} has no pending application on posting {posting_id}"
                )
            }
            Self::SlotUnassigned { slot_id } => {
                write!(f, "Slot {slot_id} has no assigned worker")
            }
            Self::CheckoutMissing { slot_id } => {
                write!(f, "Slot {slot_id} has no checkout record")
            }
            Self::NonPositiveCheckoutDuration { slot_id } => {
                write!(f, "Slot {slot_id} checkout duration is not positive")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
            Self::FormatError(msg) => write!(f, "Format error: {msg}"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow during {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
