// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift slots: the unit of work one worker performs on one posting.

use crate::error::DomainError;
use crate::posting::ShiftPosting;
use crate::slot_status::SlotStatus;
use crate::timeframe::TimeWindow;
use crate::types::{EmployerId, PostingId, SlotId, Worker, WorkerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours worked as reported after the shift, with the employer's review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    /// Reported start time.
    pub start: time::Time,
    /// Reported end time.
    pub end: time::Time,
    /// Reported unpaid break in minutes.
    pub break_minutes: u32,
    /// Worker's rating of the employer, 0 to 5.
    pub rating: Option<f64>,
    /// Worker's feedback text.
    pub feedback: Option<String>,
    /// Employer's note added when the checkout is reviewed.
    pub remark: Option<String>,
}

/// One worker-shaped unit of a posting.
///
/// Display fields (`employer_name`, `worker_name`, `title`, ...) are
/// copies taken at creation time so listings never need a join; the
/// party records remain the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSlot {
    pub id: SlotId,
    pub posting: PostingId,
    pub employer: EmployerId,
    pub employer_name: String,
    pub worker: Option<WorkerId>,
    pub worker_name: Option<String>,
    pub title: String,
    pub function: String,
    pub address: String,
    /// Scheduled date and times, copied from the posting.
    pub window: TimeWindow,
    /// Hourly rate, copied from the posting.
    pub hourly_rate: Decimal,
    /// Scheduled unpaid break in minutes.
    pub break_minutes: u32,
    pub status: SlotStatus,
    /// Reported hours and review, present once a checkout is submitted
    /// or defaulted by a late cancellation.
    pub checkout: Option<Checkout>,
}

impl ShiftSlot {
    fn from_posting(posting: &ShiftPosting, status: SlotStatus) -> Self {
        Self {
            id: 0,
            posting: posting.id,
            employer: posting.employer,
            employer_name: posting.employer_name.clone(),
            worker: None,
            worker_name: None,
            title: posting.title.clone(),
            function: posting.function.clone(),
            address: posting.address.clone(),
            window: posting.window,
            hourly_rate: posting.hourly_rate,
            break_minutes: posting.break_minutes,
            status,
            checkout: None,
        }
    }

    /// Creates an unsaved open slot for one unit of posting capacity.
    #[must_use]
    pub fn open_for(posting: &ShiftPosting) -> Self {
        Self::from_posting(posting, SlotStatus::Open)
    }

    /// Creates an unsaved application placeholder for the worker.
    #[must_use]
    pub fn application_for(posting: &ShiftPosting, worker: &Worker) -> Self {
        let mut slot = Self::from_posting(posting, SlotStatus::Applied);
        slot.worker = Some(worker.id);
        slot.worker_name = Some(worker.name.clone());
        slot
    }

    /// Creates an unsaved reserve slot for an accepted worker beyond
    /// capacity.
    #[must_use]
    pub fn reserve_for(posting: &ShiftPosting, worker: &Worker) -> Self {
        let mut slot = Self::from_posting(posting, SlotStatus::Reserve);
        slot.worker = Some(worker.id);
        slot.worker_name = Some(worker.name.clone());
        slot
    }

    /// Moves the slot to a new status after validating the transition.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the lifecycle
    /// rules forbid the move.
    pub fn transition_to(&mut self, new_status: SlotStatus) -> Result<(), DomainError> {
        self.status.validate_transition(new_status)?;
        self.status = new_status;
        Ok(())
    }

    /// Assigns a worker to the slot and marks it assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot transition to `Assigned`.
    pub fn assign_worker(&mut self, worker: &Worker) -> Result<(), DomainError> {
        self.transition_to(SlotStatus::Assigned)?;
        self.worker = Some(worker.id);
        self.worker_name = Some(worker.name.clone());
        Ok(())
    }

    /// Returns the assigned worker id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotUnassigned` if no worker is assigned.
    pub fn assigned_worker(&self) -> Result<WorkerId, DomainError> {
        self.worker
            .ok_or(DomainError::SlotUnassigned { slot_id: self.id })
    }
}
