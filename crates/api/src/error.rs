// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shiftflow_core::CoreError;
use shiftflow_domain::DomainError;
use shiftflow_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule '{rule}' violated: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// Every domain variant is matched explicitly so a new variant forces a
/// decision here rather than falling through to a catch-all.
#[must_use]
pub fn translate_domain_error(error: DomainError) -> ApiError {
    match error {
        DomainError::InvalidTitle(message) => ApiError::InvalidInput {
            field: String::from("title"),
            message,
        },
        DomainError::InvalidHourlyRate(message) => ApiError::InvalidInput {
            field: String::from("hourly_rate"),
            message,
        },
        DomainError::InvalidCapacity { capacity } => ApiError::InvalidInput {
            field: String::from("capacity"),
            message: format!("capacity must be positive, got {capacity}"),
        },
        DomainError::InvalidBreak { break_minutes } => ApiError::InvalidInput {
            field: String::from("break_minutes"),
            message: format!("break of {break_minutes} minutes does not fit the span"),
        },
        DomainError::InvalidRating { rating } => ApiError::InvalidInput {
            field: String::from("rating"),
            message: format!("rating must be between 0 and 5, got {rating}"),
        },
        DomainError::InvalidTimeWindow { reason } => ApiError::InvalidInput {
            field: String::from("time_window"),
            message: reason,
        },
        DomainError::InvalidSlotStatus { status } => ApiError::InvalidInput {
            field: String::from("slot_status"),
            message: format!("unrecognized slot status '{status}'"),
        },
        DomainError::InvalidPostingStatus { status } => ApiError::InvalidInput {
            field: String::from("posting_status"),
            message: format!("unrecognized posting status '{status}'"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("status_transition"),
                message: format!("cannot move from {from} to {to}: {reason}"),
            }
        }
        DomainError::PostingUnavailable { posting_id } => ApiError::DomainRuleViolation {
            rule: String::from("posting_available"),
            message: format!("posting {posting_id} is not accepting applications"),
        },
        DomainError::NoApplication {
            worker_id,
            posting_id,
        } => ApiError::DomainRuleViolation {
            rule: String::from("application_required"),
            message: format!("worker {worker_id} has no pending application on posting {posting_id}"),
        },
        DomainError::SlotUnassigned { slot_id } => ApiError::DomainRuleViolation {
            rule: String::from("slot_assigned"),
            message: format!("slot {slot_id} has no assigned worker"),
        },
        DomainError::CheckoutMissing { slot_id } => ApiError::DomainRuleViolation {
            rule: String::from("checkout_present"),
            message: format!("slot {slot_id} has no checkout record"),
        },
        DomainError::NonPositiveCheckoutDuration { slot_id } => ApiError::InvalidInput {
            field: String::from("checkout"),
            message: format!("slot {slot_id} checkout duration is not positive"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("cannot parse '{date_string}': {error}"),
        },
        DomainError::TimeParseError { time_string, error } => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("cannot parse '{time_string}': {error}"),
        },
        DomainError::FormatError(message) => ApiError::Internal { message },
        DomainError::DateArithmeticOverflow { operation } => ApiError::Internal {
            message: format!("date arithmetic overflow during {operation}"),
        },
    }
}

/// Translates a core engine error into an API error.
#[must_use]
pub fn translate_core_error(error: CoreError) -> ApiError {
    match error {
        CoreError::DomainViolation(domain_error) => translate_domain_error(domain_error),
    }
}

/// Translates a persistence error into an API error.
///
/// Typed not-found variants surface as `ResourceNotFound`; everything
/// else is an internal failure the caller cannot act on.
#[must_use]
pub fn translate_persistence_error(error: PersistenceError) -> ApiError {
    match error {
        PersistenceError::WorkerNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Worker"),
            message: format!("worker {id} does not exist"),
        },
        PersistenceError::EmployerNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Employer"),
            message: format!("employer {id} does not exist"),
        },
        PersistenceError::FlexPoolNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("FlexPool"),
            message: format!("flexpool {id} does not exist"),
        },
        PersistenceError::PostingNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("ShiftPosting"),
            message: format!("posting {id} does not exist"),
        },
        PersistenceError::SlotNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("ShiftSlot"),
            message: format!("slot {id} does not exist"),
        },
        PersistenceError::InvoiceNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Invoice"),
            message: format!("invoice {id} does not exist"),
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
