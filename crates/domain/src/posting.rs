// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift postings and their membership bookkeeping.
//!
//! A posting is one employer's call for workers on one date. The worker
//! membership lists (`applications`, `accepted`, `reserves`) are disjoint;
//! the mutation helpers below maintain that invariant so callers never
//! edit the lists directly.

use crate::error::DomainError;
use crate::timeframe::TimeWindow;
use crate::types::{EmployerId, FlexPoolId, PostingId, SlotId, WorkerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Posting lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostingStatus {
    /// Saved but not published; invisible to workers
    #[default]
    Draft,
    /// Published and accepting applications
    Available,
    /// Start passed without being fully worked
    Expired,
    /// Withdrawn by the employer
    Closed,
}

impl PostingStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Available => "available",
            Self::Expired => "expired",
            Self::Closed => "closed",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostingStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "available" => Ok(Self::Available),
            "expired" => Ok(Self::Expired),
            "closed" => Ok(Self::Closed),
            _ => Err(DomainError::InvalidPostingStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Expired | Self::Closed)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        let valid = match self {
            Self::Draft => matches!(new_status, Self::Available | Self::Closed),
            Self::Available => matches!(new_status, Self::Expired | Self::Closed),
            Self::Expired | Self::Closed => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by posting lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for PostingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// Which membership list a worker sits on for a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Worker has applied and is waiting for a decision.
    Applied,
    /// Worker is accepted and scheduled.
    Accepted,
    /// Worker is accepted beyond capacity, waiting as backup.
    Reserve,
}

/// One employer's call for workers on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftPosting {
    pub id: PostingId,
    pub employer: EmployerId,
    /// Display copy of the employer name; the employer record is the
    /// source of truth.
    pub employer_name: String,
    pub title: String,
    /// Role or job function being staffed.
    pub function: String,
    pub address: String,
    /// Scheduled date and times.
    pub window: TimeWindow,
    /// Unpaid break in minutes.
    pub break_minutes: u32,
    /// Hourly rate offered, excluding VAT.
    pub hourly_rate: Decimal,
    /// Required skills.
    pub skills: Vec<String>,
    /// Dress code, if any.
    pub dress_code: Option<String>,
    /// Number of workers wanted. A soft target: acceptances past it
    /// become reserves rather than errors.
    pub capacity: u32,
    /// Flexpools whose members skip the application queue.
    pub flexpools: Vec<FlexPoolId>,
    /// Workers with pending applications.
    pub applications: Vec<WorkerId>,
    /// Workers accepted and scheduled.
    pub accepted: Vec<WorkerId>,
    /// Workers accepted beyond capacity.
    pub reserves: Vec<WorkerId>,
    /// Unassigned slot rows, in assignment order.
    pub open_slots: Vec<SlotId>,
    /// Whether the posting is visible and accepting applications.
    pub available: bool,
    pub status: PostingStatus,
}

impl ShiftPosting {
    /// Returns which membership list the worker is on, if any.
    #[must_use]
    pub fn membership(&self, worker: WorkerId) -> Option<Membership> {
        if self.applications.contains(&worker) {
            Some(Membership::Applied)
        } else if self.accepted.contains(&worker) {
            Some(Membership::Accepted)
        } else if self.reserves.contains(&worker) {
            Some(Membership::Reserve)
        } else {
            None
        }
    }

    /// Removes the worker from every membership list.
    pub fn clear_membership(&mut self, worker: WorkerId) {
        self.applications.retain(|w| *w != worker);
        self.accepted.retain(|w| *w != worker);
        self.reserves.retain(|w| *w != worker);
    }

    /// Records a pending application for the worker.
    pub fn record_application(&mut self, worker: WorkerId) {
        self.clear_membership(worker);
        self.applications.push(worker);
    }

    /// Moves the worker onto the accepted list.
    pub fn record_acceptance(&mut self, worker: WorkerId) {
        self.clear_membership(worker);
        self.accepted.push(worker);
    }

    /// Moves the worker onto the reserve list.
    pub fn record_reserve(&mut self, worker: WorkerId) {
        self.clear_membership(worker);
        self.reserves.push(worker);
    }

    /// Takes the next unassigned slot id, if any remain.
    pub fn take_open_slot(&mut self) -> Option<SlotId> {
        if self.open_slots.is_empty() {
            None
        } else {
            Some(self.open_slots.remove(0))
        }
    }

    /// Returns true if the worker belongs to one of the posting's flexpools.
    #[must_use]
    pub fn is_pool_member(&self, worker_pools: &[FlexPoolId]) -> bool {
        self.flexpools.iter().any(|p| worker_pools.contains(p))
    }
}
