// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cancellation, release and reassignment transitions.
//!
//! Two boundaries govern who pays for a late change of plans: a worker
//! cancelling within 24 hours of the start is billed as if they worked
//! a four-hour shift, and an employer releasing a worker within 72
//! hours keeps the assignment on the books as `Replaced`. All naive
//! shift times are interpreted as UTC when compared against the clock.

use crate::error::CoreError;
use shiftflow_domain::{
    Checkout, DomainError, Membership, ShiftPosting, ShiftSlot, SlotId, SlotStatus, Worker,
    WorkerId,
};
use time::{Duration, OffsetDateTime};

/// Cancelling closer to the start than this bills the worker's slot as
/// worked.
pub const WORKER_CANCEL_BOUNDARY: Duration = Duration::hours(24);

/// Releasing a worker closer to the start than this records the slot as
/// `Replaced` instead of reopening it.
pub const EMPLOYER_RELEASE_BOUNDARY: Duration = Duration::hours(72);

/// Length of the checkout window defaulted onto a late cancellation.
pub const LATE_CANCEL_BILLED_SPAN: Duration = Duration::hours(4);

/// Result of a worker cancelling their assigned slot.
#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    /// Cancelled with more than 24 hours of notice; nobody is billed.
    Cancelled {
        /// The slot, now `Cancelled`.
        slot: ShiftSlot,
    },
    /// Cancelled inside the 24 hour window; the slot settles with a
    /// defaulted checkout covering the first four scheduled hours.
    BilledAsWorked {
        /// The slot, now `Settled` with a defaulted checkout.
        slot: ShiftSlot,
    },
}

/// Cancels a worker's assigned slot.
///
/// Strictly more than 24 hours before the scheduled start the slot is
/// simply cancelled. At or inside the boundary it settles immediately
/// with a checkout defaulted to the scheduled start plus four hours and
/// the scheduled break, so the late cancellation stays on the record.
///
/// # Errors
///
/// Returns an error if the slot has no assigned worker or is not in a
/// cancellable state.
pub fn worker_cancel(slot: &ShiftSlot, now: OffsetDateTime) -> Result<CancelOutcome, CoreError> {
    slot.assigned_worker()?;

    let lead = slot.window.start_at().assume_utc() - now;
    let mut updated = slot.clone();

    if lead > WORKER_CANCEL_BOUNDARY {
        updated.transition_to(SlotStatus::Cancelled)?;
        Ok(CancelOutcome::Cancelled { slot: updated })
    } else {
        updated.transition_to(SlotStatus::Settled)?;
        updated.checkout = Some(Checkout {
            start: slot.window.start,
            end: slot.window.start + LATE_CANCEL_BILLED_SPAN,
            break_minutes: slot.break_minutes,
            rating: None,
            feedback: None,
            remark: None,
        });
        Ok(CancelOutcome::BilledAsWorked { slot: updated })
    }
}

/// A reserve worker taking over a vacated slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    /// The promoted worker with their shift list repointed from the
    /// reserve slot to the vacated one.
    pub worker: Worker,
    /// The reserve slot row to delete.
    pub deleted_reserve: SlotId,
}

/// Result of an employer releasing an assigned worker.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// The vacated slot. `Assigned` again if a reserve was promoted
    /// into it, `Open` when released early with no reserve, `Replaced`
    /// when released late with no reserve.
    pub slot: ShiftSlot,
    /// Posting with membership lists reconciled.
    pub posting: ShiftPosting,
    /// The worker who was released; the caller drops the slot from
    /// their shift list.
    pub released_worker: WorkerId,
    /// Reserve promotion, when a reserve slot existed.
    pub promotion: Option<Promotion>,
}

/// Releases the assigned worker from a slot, promoting a reserve when
/// one exists.
///
/// More than 72 hours before the start the slot reopens; inside the
/// boundary it is recorded as `Replaced`. Either way, the first reserve
/// worker (if any) is moved into the vacated slot and their reserve row
/// is deleted.
///
/// # Errors
///
/// Returns an error if the slot has no assigned worker, the reserve
/// slot is not in `Reserve` status, or a lifecycle transition is
/// rejected.
pub fn employer_release(
    slot: &ShiftSlot,
    posting: &ShiftPosting,
    reserve: Option<(&ShiftSlot, &Worker)>,
    now: OffsetDateTime,
) -> Result<ReleaseOutcome, CoreError> {
    let released_worker = slot.assigned_worker()?;

    if slot.status != SlotStatus::Assigned {
        return Err(DomainError::InvalidStatusTransition {
            from: slot.status.as_str().to_string(),
            to: SlotStatus::Open.as_str().to_string(),
            reason: "only assigned slots can be released".to_string(),
        }
        .into());
    }

    let lead = slot.window.start_at().assume_utc() - now;
    let mut updated_slot = slot.clone();
    let mut updated_posting = posting.clone();
    updated_posting.clear_membership(released_worker);

    if let Some((reserve_slot, reserve_worker)) = reserve {
        if reserve_slot.status != SlotStatus::Reserve {
            return Err(DomainError::InvalidStatusTransition {
                from: reserve_slot.status.as_str().to_string(),
                to: SlotStatus::Assigned.as_str().to_string(),
                reason: "promotion requires a reserve slot".to_string(),
            }
            .into());
        }

        // The vacated slot keeps its Assigned status; only the worker
        // changes hands.
        updated_slot.worker = Some(reserve_worker.id);
        updated_slot.worker_name = Some(reserve_worker.name.clone());

        if updated_posting.membership(reserve_worker.id) == Some(Membership::Reserve) {
            updated_posting.record_acceptance(reserve_worker.id);
        }

        let mut promoted = reserve_worker.clone();
        promoted.shifts.retain(|s| *s != reserve_slot.id);
        promoted.shifts.push(slot.id);

        return Ok(ReleaseOutcome {
            slot: updated_slot,
            posting: updated_posting,
            released_worker,
            promotion: Some(Promotion {
                worker: promoted,
                deleted_reserve: reserve_slot.id,
            }),
        });
    }

    if lead > EMPLOYER_RELEASE_BOUNDARY {
        updated_slot.transition_to(SlotStatus::Open)?;
        updated_slot.worker = None;
        updated_slot.worker_name = None;
        updated_posting.open_slots.push(updated_slot.id);
    } else {
        updated_slot.transition_to(SlotStatus::Replaced)?;
    }

    Ok(ReleaseOutcome {
        slot: updated_slot,
        posting: updated_posting,
        released_worker,
        promotion: None,
    })
}

/// Result of a worker withdrawing a pending application.
#[derive(Debug, Clone, PartialEq)]
pub enum WithdrawOutcome {
    /// The application was removed.
    Withdrawn {
        /// Posting with the worker removed from the applications list.
        posting: ShiftPosting,
        /// Worker with the application removed.
        worker: Worker,
        /// Placeholder slot row to delete, if one existed.
        deleted_placeholder: Option<SlotId>,
    },
    /// The worker had no pending application. A structured no-op.
    NotApplied,
}

/// Withdraws a worker's pending application.
///
/// Only pending applications can be withdrawn; accepted and reserve
/// positions go through [`worker_cancel`] or [`employer_release`].
#[must_use]
pub fn withdraw_application(
    posting: &ShiftPosting,
    worker: &Worker,
    placeholder: Option<&ShiftSlot>,
) -> WithdrawOutcome {
    if posting.membership(worker.id) != Some(Membership::Applied) {
        return WithdrawOutcome::NotApplied;
    }

    let mut updated_posting = posting.clone();
    updated_posting.clear_membership(worker.id);

    let mut updated_worker = worker.clone();
    updated_worker.applications.retain(|p| *p != posting.id);

    let deleted_placeholder = placeholder.map(|p| {
        updated_worker.shifts.retain(|s| *s != p.id);
        p.id
    });

    WithdrawOutcome::Withdrawn {
        posting: updated_posting,
        worker: updated_worker,
        deleted_placeholder,
    }
}
