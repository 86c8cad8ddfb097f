// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sweep decisions and their transitions.
//!
//! Sweeps are driven from outside the engine; these functions only
//! decide whether a record is due and apply the resulting transition.
//! Every decision compares status first, so re-running a sweep over
//! already-processed records is a no-op.

use crate::error::CoreError;
use shiftflow_domain::{PostingStatus, ShiftPosting, ShiftSlot, SlotStatus};
use time::{Date, Duration, OffsetDateTime};

/// How long after the scheduled start an assigned slot is promoted to
/// `AwaitingCheckout`.
pub const CHECKOUT_PROMOTION_DELAY: Duration = Duration::HOUR;

/// How long the parties get to act on a checkout before the sweep
/// decides for them.
pub const REVIEW_GRACE: Duration = Duration::days(2);

/// Returns true if an assigned slot's shift has been running for at
/// least an hour and the worker should be asked to check out.
#[must_use]
pub fn checkout_due(slot: &ShiftSlot, now: OffsetDateTime) -> bool {
    slot.status == SlotStatus::Assigned
        && slot.window.start_at().assume_utc() + CHECKOUT_PROMOTION_DELAY <= now
}

/// Promotes an assigned slot to `AwaitingCheckout`.
///
/// # Errors
///
/// Returns an error if the slot is not in `Assigned`.
pub fn promote_to_checkout(slot: &ShiftSlot) -> Result<ShiftSlot, CoreError> {
    let mut updated = slot.clone();
    updated.transition_to(SlotStatus::AwaitingCheckout)?;
    Ok(updated)
}

/// Returns true if a slot still awaiting its checkout started two or
/// more days ago and should be marked a no-show.
#[must_use]
pub fn no_show_due(slot: &ShiftSlot, today: Date) -> bool {
    slot.status == SlotStatus::AwaitingCheckout && slot.window.date <= today - REVIEW_GRACE
}

/// Returns true if a submitted checkout has sat unreviewed for two or
/// more days and should be accepted automatically.
#[must_use]
pub fn auto_accept_due(slot: &ShiftSlot, today: Date) -> bool {
    slot.status == SlotStatus::CheckoutSubmitted && slot.window.date <= today - REVIEW_GRACE
}

/// Accepts an unreviewed checkout on the employer's behalf.
///
/// Unlike an explicit review this carries no rating, so the worker's
/// scores are untouched.
///
/// # Errors
///
/// Returns an error if the slot is not in `CheckoutSubmitted`.
pub fn auto_accept_checkout(slot: &ShiftSlot) -> Result<ShiftSlot, CoreError> {
    let mut updated = slot.clone();
    updated.transition_to(SlotStatus::CheckoutAccepted)?;
    Ok(updated)
}

/// Returns true if a published posting's start has passed and it should
/// expire.
#[must_use]
pub fn posting_expired(posting: &ShiftPosting, now: OffsetDateTime) -> bool {
    posting.status == PostingStatus::Available
        && posting.window.start_at().assume_utc() < now
}

/// Expires a posting whose start has passed.
///
/// # Errors
///
/// Returns an error if the posting is not in `Available`.
pub fn expire_posting(posting: &ShiftPosting) -> Result<ShiftPosting, CoreError> {
    let mut updated = posting.clone();
    updated.status.validate_transition(PostingStatus::Expired)?;
    updated.status = PostingStatus::Expired;
    updated.available = false;
    updated.open_slots.clear();
    Ok(updated)
}

/// What the expiry sweep does with one slot of an expired posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotExpiry {
    /// Unassigned capacity: delete the row outright.
    Delete,
    /// Pending application or reserve: mark the slot expired.
    Expire,
    /// Live assignment or terminal record: leave it alone.
    Keep,
}

/// Decides what the expiry sweep does with a slot whose posting
/// expired.
#[must_use]
pub const fn slot_expiry_action(slot: &ShiftSlot) -> SlotExpiry {
    match slot.status {
        SlotStatus::Open => SlotExpiry::Delete,
        SlotStatus::Applied | SlotStatus::Reserve => SlotExpiry::Expire,
        _ => SlotExpiry::Keep,
    }
}

/// Marks a pending slot expired.
///
/// # Errors
///
/// Returns an error if the slot cannot transition to `Expired`.
pub fn expire_slot(slot: &ShiftSlot) -> Result<ShiftSlot, CoreError> {
    let mut updated = slot.clone();
    updated.transition_to(SlotStatus::Expired)?;
    Ok(updated)
}
