// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot status tracking and transition logic.
//!
//! A slot is the unit of work one worker performs on one posting. Its
//! status is the single source of truth for where that slot sits in the
//! lifecycle; posting and worker records only hold id references.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Slot lifecycle states.
///
/// `Open`, `Applied` and `Reserve` slots are bookkeeping rows: an open
/// slot is unassigned capacity, an applied slot is a pending application
/// placeholder, a reserve slot is an accepted worker beyond capacity.
/// All other states describe an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// Unassigned capacity on a published posting
    Open,
    /// Pending application placeholder
    Applied,
    /// Worker accepted and scheduled to work
    Assigned,
    /// Worker accepted beyond capacity, waiting as backup
    Reserve,
    /// Shift has started; worker must submit a checkout
    AwaitingCheckout,
    /// Checkout submitted, waiting for employer review
    CheckoutSubmitted,
    /// Employer accepted the checkout
    CheckoutAccepted,
    /// Employer rejected the checkout
    CheckoutRejected,
    /// Consumed by an invoice, or billed as worked after a late cancel
    Settled,
    /// Worker cancelled more than 24 hours ahead
    Cancelled,
    /// Worker never showed up
    NoShow,
    /// Application rejected by the employer
    Rejected,
    /// Worker replaced by the employer inside the 72 hour window
    Replaced,
    /// Posting start passed without the slot being worked
    Expired,
}

impl SlotStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Applied => "applied",
            Self::Assigned => "assigned",
            Self::Reserve => "reserve",
            Self::AwaitingCheckout => "awaiting_checkout",
            Self::CheckoutSubmitted => "checkout_submitted",
            Self::CheckoutAccepted => "checkout_accepted",
            Self::CheckoutRejected => "checkout_rejected",
            Self::Settled => "settled",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
            Self::Rejected => "rejected",
            Self::Replaced => "replaced",
            Self::Expired => "expired",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSlotStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "open" => Ok(Self::Open),
            "applied" => Ok(Self::Applied),
            "assigned" => Ok(Self::Assigned),
            "reserve" => Ok(Self::Reserve),
            "awaiting_checkout" => Ok(Self::AwaitingCheckout),
            "checkout_submitted" => Ok(Self::CheckoutSubmitted),
            "checkout_accepted" => Ok(Self::CheckoutAccepted),
            "checkout_rejected" => Ok(Self::CheckoutRejected),
            "settled" => Ok(Self::Settled),
            "cancelled" => Ok(Self::Cancelled),
            "no_show" => Ok(Self::NoShow),
            "rejected" => Ok(Self::Rejected),
            "replaced" => Ok(Self::Replaced),
            "expired" => Ok(Self::Expired),
            _ => Err(DomainError::InvalidSlotStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Settled
                | Self::Cancelled
                | Self::NoShow
                | Self::Rejected
                | Self::Replaced
                | Self::Expired
        )
    }

    /// Returns true if the slot holds a live assignment.
    #[must_use]
    pub const fn is_assignment(&self) -> bool {
        matches!(
            self,
            Self::Assigned
                | Self::AwaitingCheckout
                | Self::CheckoutSubmitted
                | Self::CheckoutAccepted
                | Self::CheckoutRejected
        )
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        // Valid transitions based on current state
        let valid = match self {
            Self::Open => matches!(new_status, Self::Assigned | Self::Expired),
            Self::Applied => {
                matches!(new_status, Self::Cancelled | Self::Rejected | Self::Expired)
            }
            Self::Assigned => matches!(
                new_status,
                Self::AwaitingCheckout
                    | Self::Open
                    | Self::Cancelled
                    | Self::Settled
                    | Self::Replaced
            ),
            Self::Reserve => matches!(new_status, Self::Assigned | Self::Expired),
            Self::AwaitingCheckout => {
                matches!(new_status, Self::CheckoutSubmitted | Self::NoShow)
            }
            Self::CheckoutSubmitted => {
                matches!(new_status, Self::CheckoutAccepted | Self::CheckoutRejected)
            }
            // A rejected checkout may be corrected and resubmitted; an
            // accepted one is consumed by invoicing.
            Self::CheckoutRejected => matches!(new_status, Self::CheckoutSubmitted),
            Self::CheckoutAccepted => matches!(new_status, Self::Settled),
            Self::Settled
            | Self::Cancelled
            | Self::NoShow
            | Self::Rejected
            | Self::Replaced
            | Self::Expired => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by slot lifecycle rules".to_string(),
            })
        }
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}
