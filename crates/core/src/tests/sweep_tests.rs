// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{slot_in_status, test_posting, test_worker};
use crate::{
    SlotExpiry, auto_accept_checkout, auto_accept_due, checkout_due, expire_posting, expire_slot,
    no_show_due, posting_expired, promote_to_checkout, slot_expiry_action,
};
use shiftflow_domain::{PostingStatus, ShiftSlot, SlotStatus};
use time::Duration;
use time::macros::date;

// The helper window starts 2026-05-01 14:00.
fn shift_start() -> time::OffsetDateTime {
    date!(2026 - 05 - 01).midnight().assume_utc() + Duration::hours(14)
}

#[test]
fn test_checkout_due_one_hour_after_start() {
    let posting = test_posting(1, 1);
    let worker = test_worker(40);
    let slot = slot_in_status(100, &posting, &worker, SlotStatus::Assigned);

    assert!(!checkout_due(&slot, shift_start()));
    assert!(!checkout_due(&slot, shift_start() + Duration::minutes(59)));
    assert!(checkout_due(&slot, shift_start() + Duration::HOUR));
    assert!(checkout_due(&slot, shift_start() + Duration::days(1)));
}

#[test]
fn test_checkout_due_ignores_other_statuses() {
    let posting = test_posting(1, 1);
    let worker = test_worker(40);
    let late = shift_start() + Duration::days(1);

    for status in [
        SlotStatus::AwaitingCheckout,
        SlotStatus::CheckoutSubmitted,
        SlotStatus::Settled,
        SlotStatus::Cancelled,
    ] {
        let slot = slot_in_status(100, &posting, &worker, status);
        assert!(!checkout_due(&slot, late), "{status:?} must not be due");
    }
}

#[test]
fn test_promotion_is_idempotent_by_status_guard() {
    let posting = test_posting(1, 1);
    let worker = test_worker(40);
    let slot = slot_in_status(100, &posting, &worker, SlotStatus::Assigned);

    let promoted = promote_to_checkout(&slot).unwrap();
    assert_eq!(promoted.status, SlotStatus::AwaitingCheckout);

    // A second sweep pass sees the new status and skips the slot.
    assert!(!checkout_due(&promoted, shift_start() + Duration::days(1)));
    assert!(promote_to_checkout(&promoted).is_err());
}

#[test]
fn test_no_show_due_two_days_after_start_date() {
    let posting = test_posting(1, 1);
    let worker = test_worker(40);
    let slot = slot_in_status(100, &posting, &worker, SlotStatus::AwaitingCheckout);

    assert!(!no_show_due(&slot, date!(2026 - 05 - 02)));
    assert!(no_show_due(&slot, date!(2026 - 05 - 03)));
    assert!(no_show_due(&slot, date!(2026 - 05 - 10)));
}

#[test]
fn test_auto_accept_due_two_days_after_start_date() {
    let posting = test_posting(1, 1);
    let worker = test_worker(40);
    let slot = slot_in_status(100, &posting, &worker, SlotStatus::CheckoutSubmitted);

    assert!(!auto_accept_due(&slot, date!(2026 - 05 - 02)));
    assert!(auto_accept_due(&slot, date!(2026 - 05 - 03)));

    let accepted = auto_accept_checkout(&slot).unwrap();
    assert_eq!(accepted.status, SlotStatus::CheckoutAccepted);
    assert!(!auto_accept_due(&accepted, date!(2026 - 05 - 10)));
}

#[test]
fn test_posting_expiry() {
    let posting = test_posting(1, 2);
    assert!(!posting_expired(&posting, shift_start() - Duration::HOUR));
    assert!(posting_expired(&posting, shift_start() + Duration::minutes(1)));

    let expired = expire_posting(&posting).unwrap();
    assert_eq!(expired.status, PostingStatus::Expired);
    assert!(!expired.available);
    assert!(expired.open_slots.is_empty());

    // Second pass: no longer reported as expired.
    assert!(!posting_expired(&expired, shift_start() + Duration::days(1)));
    assert!(expire_posting(&expired).is_err());
}

#[test]
fn test_slot_expiry_actions() {
    let posting = test_posting(1, 1);
    let worker = test_worker(40);

    let open = ShiftSlot::open_for(&posting);
    assert_eq!(slot_expiry_action(&open), SlotExpiry::Delete);

    let applied = ShiftSlot::application_for(&posting, &worker);
    assert_eq!(slot_expiry_action(&applied), SlotExpiry::Expire);
    let expired = expire_slot(&applied).unwrap();
    assert_eq!(expired.status, SlotStatus::Expired);

    let reserve = ShiftSlot::reserve_for(&posting, &worker);
    assert_eq!(slot_expiry_action(&reserve), SlotExpiry::Expire);

    let assigned = slot_in_status(100, &posting, &worker, SlotStatus::Assigned);
    assert_eq!(slot_expiry_action(&assigned), SlotExpiry::Keep);

    let settled = slot_in_status(101, &posting, &worker, SlotStatus::Settled);
    assert_eq!(slot_expiry_action(&settled), SlotExpiry::Keep);
}
