// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Worker cancellation and employer release tests.
//!
//! The fixture shift starts 2026-05-01 14:00 UTC, so the 24 hour
//! cancellation boundary falls at 2026-04-30 14:00 and the 72 hour
//! release boundary at 2026-04-28 14:00.

use time::macros::{datetime, time};

use super::helpers;
use crate::handlers;
use crate::notify::NoticeKind;
use crate::request_response::{EmployerReplaceRequest, WorkerCancelRequest};
use shiftflow_domain::SlotStatus;

#[test]
fn test_cancel_ahead_of_boundary_is_free() {
    let mut store = helpers::store();
    let employer_id = helpers::register_employer(&mut store, "Hotel Noord", "planning@noord.example");
    let worker_id = helpers::register_worker(&mut store, "Mila Jansen", "mila@example.com");
    let posting_id = helpers::publish_posting(&mut store, employer_id);
    let slot_id = helpers::assign_worker(&mut store, posting_id, worker_id);

    let clock = helpers::clock_at(datetime!(2026-04-30 13:00 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let response =
        handlers::worker_cancel(&mut store, &clock, &notifier, WorkerCancelRequest { slot_id })
            .unwrap();

    assert!(!response.billed);
    assert_eq!(response.status, "cancelled");

    let slot = store.get_slot(slot_id).unwrap();
    assert_eq!(slot.status, SlotStatus::Cancelled);
    assert!(slot.checkout.is_none());

    let posting = store.get_posting(posting_id).unwrap();
    assert!(posting.accepted.is_empty());

    assert_eq!(
        notifier.kinds_for("planning@noord.example"),
        vec![NoticeKind::ShiftCancelled]
    );
}

#[test]
fn test_late_cancel_is_billed_with_defaulted_checkout() {
    let mut store = helpers::store();
    let employer_id = helpers::register_employer(&mut store, "Hotel Noord", "planning@noord.example");
    let worker_id = helpers::register_worker(&mut store, "Mila Jansen", "mila@example.com");
    let posting_id = helpers::publish_posting(&mut store, employer_id);
    let slot_id = helpers::assign_worker(&mut store, posting_id, worker_id);

    // Twenty-three hours of notice.
    let clock = helpers::clock_at(datetime!(2026-04-30 15:00 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let response =
        handlers::worker_cancel(&mut store, &clock, &notifier, WorkerCancelRequest { slot_id })
            .unwrap();

    assert!(response.billed);
    assert_eq!(response.status, "settled");

    let slot = store.get_slot(slot_id).unwrap();
    assert_eq!(slot.status, SlotStatus::Settled);
    let checkout = slot.checkout.unwrap();
    assert_eq!(checkout.start, time!(14:00));
    assert_eq!(checkout.end, time!(18:00));
    assert_eq!(checkout.break_minutes, 30);
    assert!(checkout.rating.is_none());
}

#[test]
fn test_cancel_at_exact_boundary_is_billed() {
    let mut store = helpers::store();
    let employer_id = helpers::register_employer(&mut store, "Hotel Noord", "planning@noord.example");
    let worker_id = helpers::register_worker(&mut store, "Mila Jansen", "mila@example.com");
    let posting_id = helpers::publish_posting(&mut store, employer_id);
    let slot_id = helpers::assign_worker(&mut store, posting_id, worker_id);

    let clock = helpers::clock_at(datetime!(2026-04-30 14:00 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let response =
        handlers::worker_cancel(&mut store, &clock, &notifier, WorkerCancelRequest { slot_id })
            .unwrap();
    assert!(response.billed);
}

#[test]
fn test_early_release_reopens_slot() {
    let mut store = helpers::store();
    let employer_id = helpers::register_employer(&mut store, "Hotel Noord", "planning@noord.example");
    let worker_id = helpers::register_worker(&mut store, "Mila Jansen", "mila@example.com");
    let posting_id = helpers::publish_posting(&mut store, employer_id);
    let slot_id = helpers::assign_worker(&mut store, posting_id, worker_id);

    let clock = helpers::clock_at(datetime!(2026-04-27 12:00 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let response =
        handlers::employer_replace(&mut store, &clock, &notifier, EmployerReplaceRequest { slot_id })
            .unwrap();

    assert!(response.reopened);
    assert_eq!(response.status, "open");
    assert!(response.promoted_worker_id.is_none());

    let slot = store.get_slot(slot_id).unwrap();
    assert_eq!(slot.status, SlotStatus::Open);
    assert!(slot.worker.is_none());
    assert!(slot.worker_name.is_none());

    let posting = store.get_posting(posting_id).unwrap();
    assert!(posting.accepted.is_empty());
    assert!(posting.open_slots.contains(&slot_id));

    let worker = store.get_worker(worker_id).unwrap();
    assert!(worker.shifts.is_empty());
    assert_eq!(
        notifier.kinds_for("mila@example.com"),
        vec![NoticeKind::WorkerReleased]
    );
}

#[test]
fn test_release_at_boundary_marks_slot_replaced() {
    let mut store = helpers::store();
    let employer_id = helpers::register_employer(&mut store, "Hotel Noord", "planning@noord.example");
    let worker_id = helpers::register_worker(&mut store, "Mila Jansen", "mila@example.com");
    let posting_id = helpers::publish_posting(&mut store, employer_id);
    let slot_id = helpers::assign_worker(&mut store, posting_id, worker_id);

    // Exactly 72 hours is already inside the boundary.
    let clock = helpers::clock_at(datetime!(2026-04-28 14:00 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let response =
        handlers::employer_replace(&mut store, &clock, &notifier, EmployerReplaceRequest { slot_id })
            .unwrap();

    assert!(!response.reopened);
    assert_eq!(response.status, "replaced");

    let slot = store.get_slot(slot_id).unwrap();
    assert_eq!(slot.status, SlotStatus::Replaced);

    let posting = store.get_posting(posting_id).unwrap();
    assert!(!posting.open_slots.contains(&slot_id));
}

#[test]
fn test_release_promotes_first_reserve() {
    let mut store = helpers::store();
    let employer_id = helpers::register_employer(&mut store, "Hotel Noord", "planning@noord.example");
    let assigned = helpers::register_worker(&mut store, "Mila Jansen", "mila@example.com");
    let reserve = helpers::register_worker(&mut store, "Sam de Vries", "sam@example.com");

    let mut request = helpers::posting_request(employer_id);
    request.capacity = 1;
    let posting_id = handlers::create_posting(&mut store, request).unwrap().postings[0].posting_id;

    let slot_id = helpers::assign_worker(&mut store, posting_id, assigned);
    let reserve_slot_id = helpers::assign_worker(&mut store, posting_id, reserve);
    assert_eq!(
        store.get_slot(reserve_slot_id).unwrap().status,
        SlotStatus::Reserve
    );

    let clock = helpers::clock_at(datetime!(2026-04-30 12:00 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let response =
        handlers::employer_replace(&mut store, &clock, &notifier, EmployerReplaceRequest { slot_id })
            .unwrap();

    assert_eq!(response.promoted_worker_id, Some(reserve));
    assert!(!response.reopened);
    assert_eq!(response.status, "assigned");

    let slot = store.get_slot(slot_id).unwrap();
    assert_eq!(slot.status, SlotStatus::Assigned);
    assert_eq!(slot.worker, Some(reserve));
    assert_eq!(slot.worker_name.as_deref(), Some("Sam de Vries"));

    // The reserve bookkeeping row is gone.
    assert!(store.get_slot(reserve_slot_id).is_err());

    let posting = store.get_posting(posting_id).unwrap();
    assert_eq!(posting.accepted, vec![reserve]);
    assert!(posting.reserves.is_empty());

    let promoted = store.get_worker(reserve).unwrap();
    assert_eq!(promoted.shifts, vec![slot_id]);

    let released = store.get_worker(assigned).unwrap();
    assert!(released.shifts.is_empty());

    assert_eq!(
        notifier.kinds_for("sam@example.com"),
        vec![NoticeKind::ReservePromoted]
    );
    assert_eq!(
        notifier.kinds_for("mila@example.com"),
        vec![NoticeKind::WorkerReleased]
    );
}
