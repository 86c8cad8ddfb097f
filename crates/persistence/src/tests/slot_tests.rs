// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Duration;
use time::macros::{date, time};

use crate::tests::{create_test_posting, create_test_worker, seeded_store};
use crate::PersistenceError;
use shiftflow_domain::{Checkout, InvoiceParty, ShiftSlot, SlotStatus};

fn shift_start() -> time::OffsetDateTime {
    date!(2026 - 05 - 01).midnight().assume_utc() + Duration::hours(14)
}

#[test]
fn test_create_slot_assigns_id_and_round_trips() {
    let (mut store, _, _, posting) = seeded_store();
    let saved = store.create_slot(&ShiftSlot::open_for(&posting)).unwrap();
    assert!(saved.id > 0);

    let fetched = store.get_slot(saved.id).unwrap();
    assert_eq!(fetched, saved);
    assert_eq!(fetched.status, SlotStatus::Open);
    assert_eq!(fetched.posting, posting.id);
}

#[test]
fn test_list_slots_for_posting_and_worker() {
    let (mut store, worker, _, posting) = seeded_store();

    let open = store.create_slot(&ShiftSlot::open_for(&posting)).unwrap();
    let applied = store
        .create_slot(&ShiftSlot::application_for(&posting, &worker))
        .unwrap();

    let for_posting = store.list_slots_for_posting(posting.id).unwrap();
    assert_eq!(
        for_posting.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![open.id, applied.id]
    );

    let for_worker = store.list_slots_for_worker(worker.id).unwrap();
    assert_eq!(for_worker.iter().map(|s| s.id).collect::<Vec<_>>(), vec![applied.id]);
}

#[test]
fn test_update_slot_reindexes_status_and_worker() {
    let (mut store, worker, _, posting) = seeded_store();
    let mut slot = store.create_slot(&ShiftSlot::open_for(&posting)).unwrap();

    slot.assign_worker(&worker).unwrap();
    store.update_slot(&slot).unwrap();

    let fetched = store.get_slot(slot.id).unwrap();
    assert_eq!(fetched.status, SlotStatus::Assigned);
    assert_eq!(fetched.worker, Some(worker.id));

    // The worker index column was updated along with the document.
    let for_worker = store.list_slots_for_worker(worker.id).unwrap();
    assert_eq!(for_worker.iter().map(|s| s.id).collect::<Vec<_>>(), vec![slot.id]);
}

#[test]
fn test_update_missing_slot_fails() {
    let (mut store, _, _, posting) = seeded_store();
    let mut ghost = ShiftSlot::open_for(&posting);
    ghost.id = 404;
    assert_eq!(
        store.update_slot(&ghost),
        Err(PersistenceError::SlotNotFound(404))
    );
}

#[test]
fn test_promotion_working_set_cutoff_is_inclusive() {
    let (mut store, worker, _, posting) = seeded_store();
    let mut slot = ShiftSlot::open_for(&posting);
    slot.assign_worker(&worker).unwrap();
    let slot = store.create_slot(&slot).unwrap();

    let before = store
        .list_slots_by_status_starting_before(
            SlotStatus::Assigned,
            shift_start() - Duration::minutes(1),
        )
        .unwrap();
    assert!(before.is_empty());

    // The slot becomes part of the working set at its exact start.
    let at_start = store
        .list_slots_by_status_starting_before(SlotStatus::Assigned, shift_start())
        .unwrap();
    assert_eq!(at_start.iter().map(|s| s.id).collect::<Vec<_>>(), vec![slot.id]);
}

#[test]
fn test_review_working_set_by_date() {
    let (mut store, worker, _, posting) = seeded_store();
    let mut slot = ShiftSlot::application_for(&posting, &worker);
    slot.status = SlotStatus::AwaitingCheckout;
    let slot = store.create_slot(&slot).unwrap();

    let too_early = store
        .list_slots_by_status_on_or_before(SlotStatus::AwaitingCheckout, date!(2026 - 04 - 30))
        .unwrap();
    assert!(too_early.is_empty());

    let due = store
        .list_slots_by_status_on_or_before(SlotStatus::AwaitingCheckout, date!(2026 - 05 - 01))
        .unwrap();
    assert_eq!(due.iter().map(|s| s.id).collect::<Vec<_>>(), vec![slot.id]);
}

#[test]
fn test_applied_slots_for_worker_filter_by_date_and_status() {
    let (mut store, worker, employer, posting) = seeded_store();

    let applied = store
        .create_slot(&ShiftSlot::application_for(&posting, &worker))
        .unwrap();

    // Same worker, different date: must not appear.
    let mut other_day = create_test_posting(&employer);
    other_day.window.date = date!(2026 - 05 - 02);
    let other_day = store.create_posting(&other_day).unwrap();
    store
        .create_slot(&ShiftSlot::application_for(&other_day, &worker))
        .unwrap();

    // Same day but already assigned: must not appear either.
    let mut assigned = ShiftSlot::open_for(&posting);
    assigned.assign_worker(&worker).unwrap();
    store.create_slot(&assigned).unwrap();

    let same_day = store
        .list_applied_slots_for_worker_on(worker.id, date!(2026 - 05 - 01))
        .unwrap();
    assert_eq!(same_day.iter().map(|s| s.id).collect::<Vec<_>>(), vec![applied.id]);
}

#[test]
fn test_find_applied_slot() {
    let (mut store, worker, _, posting) = seeded_store();
    assert!(store.find_applied_slot(posting.id, worker.id).unwrap().is_none());

    let applied = store
        .create_slot(&ShiftSlot::application_for(&posting, &worker))
        .unwrap();
    let found = store.find_applied_slot(posting.id, worker.id).unwrap();
    assert_eq!(found.map(|s| s.id), Some(applied.id));
}

#[test]
fn test_first_reserve_slot_is_oldest() {
    let (mut store, worker, _, posting) = seeded_store();
    let second_worker = store
        .create_worker(&create_test_worker("Sam de Vries", "sam@example.com"))
        .unwrap();

    let first = store
        .create_slot(&ShiftSlot::reserve_for(&posting, &worker))
        .unwrap();
    store
        .create_slot(&ShiftSlot::reserve_for(&posting, &second_worker))
        .unwrap();

    let found = store.find_first_reserve_slot(posting.id).unwrap();
    assert_eq!(found.map(|s| s.id), Some(first.id));
}

#[test]
fn test_billable_slots_split_by_party() {
    let (mut store, worker, employer, posting) = seeded_store();

    let mut billable = ShiftSlot::application_for(&posting, &worker);
    billable.status = SlotStatus::CheckoutAccepted;
    billable.checkout = Some(Checkout {
        start: time!(14:00),
        end: time!(18:00),
        break_minutes: 30,
        rating: None,
        feedback: None,
        remark: None,
    });
    let billable = store.create_slot(&billable).unwrap();

    // A settled slot is no longer billable.
    let mut settled = billable.clone();
    settled.id = 0;
    settled.status = SlotStatus::Settled;
    store.create_slot(&settled).unwrap();

    let for_worker = store
        .list_billable_slots_for_party(InvoiceParty::Worker(worker.id))
        .unwrap();
    assert_eq!(for_worker.iter().map(|s| s.id).collect::<Vec<_>>(), vec![billable.id]);

    let for_employer = store
        .list_billable_slots_for_party(InvoiceParty::Employer(employer.id))
        .unwrap();
    assert_eq!(for_employer.iter().map(|s| s.id).collect::<Vec<_>>(), vec![billable.id]);

    let other_party = store
        .list_billable_slots_for_party(InvoiceParty::Worker(worker.id + 1))
        .unwrap();
    assert!(other_party.is_empty());
}

#[test]
fn test_delete_slot() {
    let (mut store, _, _, posting) = seeded_store();
    let slot = store.create_slot(&ShiftSlot::open_for(&posting)).unwrap();

    store.delete_slot(slot.id).unwrap();
    assert!(matches!(
        store.get_slot(slot.id),
        Err(PersistenceError::SlotNotFound(_))
    ));
    assert_eq!(
        store.delete_slot(slot.id),
        Err(PersistenceError::SlotNotFound(slot.id))
    );
}
