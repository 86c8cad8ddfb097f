// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application and acceptance transitions.
//!
//! Every function here is pure: it takes the current entities, returns
//! updated copies inside an outcome value, and performs no I/O. The
//! caller is responsible for persisting the outcome atomically and for
//! wiring up store-assigned ids on freshly created slots.

use crate::error::CoreError;
use shiftflow_domain::{
    DomainError, Membership, PostingStatus, ShiftPosting, ShiftSlot, SlotId, SlotStatus, Worker,
};

/// Result of a worker applying to a posting.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// Flexpool fast path: the worker was assigned to an open slot
    /// without queuing.
    DirectlyAssigned {
        /// Posting with the worker on the accepted list and the open
        /// slot consumed.
        posting: ShiftPosting,
        /// The open slot, now assigned to the worker.
        slot: ShiftSlot,
        /// Worker with the slot added to their shift list.
        worker: Worker,
    },
    /// The application was queued for employer review.
    Queued {
        /// Posting with the worker on the applications list.
        posting: ShiftPosting,
        /// Unsaved application placeholder slot; the caller persists it
        /// and adds the assigned id to the worker's shift list.
        placeholder: ShiftSlot,
        /// Worker with the posting added to their application list.
        worker: Worker,
    },
    /// The worker is already on one of the posting's membership lists.
    /// A structured no-op, not an error.
    AlreadyApplied {
        /// Which list the worker was found on.
        membership: Membership,
    },
}

/// Applies a worker to a posting.
///
/// Workers belonging to one of the posting's flexpools skip the queue
/// and take the first open slot directly; everyone else (and pool
/// members when no open slot remains) is queued with an application
/// placeholder.
///
/// `open_slot` is the slot record for the first id on the posting's
/// `open_slots` list, if any.
///
/// # Errors
///
/// Returns `DomainError::PostingUnavailable` if the posting is not
/// published and accepting applications.
pub fn apply_to_posting(
    posting: &ShiftPosting,
    worker: &Worker,
    open_slot: Option<&ShiftSlot>,
) -> Result<ApplyOutcome, CoreError> {
    if let Some(membership) = posting.membership(worker.id) {
        return Ok(ApplyOutcome::AlreadyApplied { membership });
    }

    if !posting.available || posting.status != PostingStatus::Available {
        return Err(DomainError::PostingUnavailable {
            posting_id: posting.id,
        }
        .into());
    }

    if posting.is_pool_member(&worker.flexpools)
        && let Some(open) = open_slot
    {
        let mut updated_posting = posting.clone();
        let taken = updated_posting.take_open_slot();
        debug_assert_eq!(taken, Some(open.id));
        updated_posting.record_acceptance(worker.id);

        let mut slot = open.clone();
        slot.assign_worker(worker)?;

        let mut updated_worker = worker.clone();
        updated_worker.shifts.push(slot.id);

        return Ok(ApplyOutcome::DirectlyAssigned {
            posting: updated_posting,
            slot,
            worker: updated_worker,
        });
    }

    let mut updated_posting = posting.clone();
    updated_posting.record_application(worker.id);

    let placeholder = ShiftSlot::application_for(posting, worker);

    let mut updated_worker = worker.clone();
    updated_worker.applications.push(posting.id);

    Ok(ApplyOutcome::Queued {
        posting: updated_posting,
        placeholder,
        worker: updated_worker,
    })
}

/// Result of an employer accepting an applicant.
#[derive(Debug, Clone, PartialEq)]
pub enum AcceptOutcome {
    /// The worker took an open slot and is scheduled to work.
    Assigned {
        /// Posting with the worker moved to the accepted list.
        posting: ShiftPosting,
        /// The open slot, now assigned.
        slot: ShiftSlot,
        /// Worker with lists updated.
        worker: Worker,
        /// Application placeholder to delete, if one existed.
        removed_placeholder: Option<SlotId>,
    },
    /// Capacity was full; the worker becomes a reserve.
    Reserved {
        /// Posting with the worker moved to the reserve list.
        posting: ShiftPosting,
        /// Unsaved reserve slot; the caller persists it and adds the
        /// assigned id to the worker's shift list.
        reserve: ShiftSlot,
        /// Worker with lists updated.
        worker: Worker,
        /// Application placeholder to delete, if one existed.
        removed_placeholder: Option<SlotId>,
    },
}

/// Accepts a pending applicant.
///
/// With an open slot remaining the worker is assigned to it; on a full
/// posting the worker becomes a reserve. Capacity is a soft target:
/// acceptance never fails for being over it.
///
/// # Errors
///
/// Returns `DomainError::NoApplication` if the worker is not on the
/// applications list.
pub fn accept_worker(
    posting: &ShiftPosting,
    worker: &Worker,
    open_slot: Option<&ShiftSlot>,
    placeholder: Option<&ShiftSlot>,
) -> Result<AcceptOutcome, CoreError> {
    if posting.membership(worker.id) != Some(Membership::Applied) {
        return Err(DomainError::NoApplication {
            worker_id: worker.id,
            posting_id: posting.id,
        }
        .into());
    }

    let removed_placeholder = placeholder.map(|p| p.id);

    let mut updated_worker = worker.clone();
    updated_worker.applications.retain(|p| *p != posting.id);
    if let Some(placeholder_id) = removed_placeholder {
        updated_worker.shifts.retain(|s| *s != placeholder_id);
    }

    let mut updated_posting = posting.clone();

    if let Some(open) = open_slot {
        let taken = updated_posting.take_open_slot();
        debug_assert_eq!(taken, Some(open.id));
        updated_posting.record_acceptance(worker.id);

        let mut slot = open.clone();
        slot.assign_worker(worker)?;
        updated_worker.shifts.push(slot.id);

        Ok(AcceptOutcome::Assigned {
            posting: updated_posting,
            slot,
            worker: updated_worker,
            removed_placeholder,
        })
    } else {
        updated_posting.record_reserve(worker.id);
        let reserve = ShiftSlot::reserve_for(posting, worker);

        Ok(AcceptOutcome::Reserved {
            posting: updated_posting,
            reserve,
            worker: updated_worker,
            removed_placeholder,
        })
    }
}

/// Result of an employer rejecting an applicant.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectOutcome {
    /// Posting with the worker removed from the applications list.
    pub posting: ShiftPosting,
    /// Worker with the application and placeholder removed.
    pub worker: Worker,
    /// The placeholder slot marked rejected, if one existed.
    pub rejected_placeholder: Option<ShiftSlot>,
}

/// Rejects a pending applicant.
///
/// # Errors
///
/// Returns `DomainError::NoApplication` if the worker is not on the
/// applications list.
pub fn reject_worker(
    posting: &ShiftPosting,
    worker: &Worker,
    placeholder: Option<&ShiftSlot>,
) -> Result<RejectOutcome, CoreError> {
    if posting.membership(worker.id) != Some(Membership::Applied) {
        return Err(DomainError::NoApplication {
            worker_id: worker.id,
            posting_id: posting.id,
        }
        .into());
    }

    let mut updated_posting = posting.clone();
    updated_posting.clear_membership(worker.id);

    let mut updated_worker = worker.clone();
    updated_worker.applications.retain(|p| *p != posting.id);

    let rejected_placeholder = match placeholder {
        Some(p) => {
            let mut rejected = p.clone();
            rejected.transition_to(SlotStatus::Rejected)?;
            updated_worker.shifts.retain(|s| *s != p.id);
            Some(rejected)
        }
        None => None,
    };

    Ok(RejectOutcome {
        posting: updated_posting,
        worker: updated_worker,
        rejected_placeholder,
    })
}
