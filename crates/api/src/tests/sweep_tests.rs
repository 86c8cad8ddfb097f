// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle sweep tests: checkout promotion, no-shows, auto-accepts,
//! and expiry.

use time::macros::datetime;

use super::helpers;
use crate::handlers;
use crate::notify::NoticeKind;
use crate::request_response::{ApplyToPostingRequest, SubmitCheckoutRequest};
use crate::sweep::{SweepReport, run_settlement_sweep};
use shiftflow_domain::{PostingStatus, SlotStatus};
use shiftflow_persistence::Persistence;

/// Registers a worker and assigns them to a capacity-one copy of the
/// standard posting.
fn assigned_fixture(store: &mut Persistence) -> (i64, i64, i64) {
    let employer_id = helpers::register_employer(store, "Hotel Noord", "planning@noord.example");
    let worker_id = helpers::register_worker(store, "Mila Jansen", "mila@example.com");
    let mut request = helpers::posting_request(employer_id);
    request.capacity = 1;
    let posting_id = handlers::create_posting(store, request).unwrap().postings[0].posting_id;
    let slot_id = helpers::assign_worker(store, posting_id, worker_id);
    (slot_id, worker_id, posting_id)
}

#[test]
fn test_promotion_sweep_is_idempotent() {
    let mut store = helpers::store();
    let (slot_id, _, posting_id) = assigned_fixture(&mut store);

    // Two hours into the shift.
    let clock = helpers::clock_at(datetime!(2026-05-01 16:00 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let report = run_settlement_sweep(&mut store, &clock, &notifier).unwrap();

    assert_eq!(report.promoted_to_checkout, 1);
    assert_eq!(report.errors, 0);
    // The posting's start has passed, so the same run expires it.
    assert_eq!(report.postings_expired, 1);
    assert_eq!(report.slots_deleted, 0);

    let slot = store.get_slot(slot_id).unwrap();
    assert_eq!(slot.status, SlotStatus::AwaitingCheckout);
    let posting = store.get_posting(posting_id).unwrap();
    assert_eq!(posting.status, PostingStatus::Expired);

    assert_eq!(
        notifier.kinds_for("mila@example.com"),
        vec![NoticeKind::CheckoutRequested]
    );

    let second = run_settlement_sweep(&mut store, &clock, &notifier).unwrap();
    assert_eq!(second, SweepReport::default());
}

#[test]
fn test_promotion_waits_an_hour_into_the_shift() {
    let mut store = helpers::store();
    let (slot_id, _, _) = assigned_fixture(&mut store);

    let clock = helpers::clock_at(datetime!(2026-05-01 14:30 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let report = run_settlement_sweep(&mut store, &clock, &notifier).unwrap();

    assert_eq!(report.promoted_to_checkout, 0);
    assert_eq!(
        store.get_slot(slot_id).unwrap().status,
        SlotStatus::Assigned
    );
}

#[test]
fn test_unreported_checkout_becomes_no_show_after_grace() {
    let mut store = helpers::store();
    let (slot_id, worker_id, _) = assigned_fixture(&mut store);
    helpers::promote_slot(&mut store, slot_id);

    // One day is still within the review grace.
    let early = helpers::clock_at(datetime!(2026-05-02 12:00 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let report = run_settlement_sweep(&mut store, &early, &notifier).unwrap();
    assert_eq!(report.no_shows, 0);

    let late = helpers::clock_at(datetime!(2026-05-03 12:00 UTC));
    let report = run_settlement_sweep(&mut store, &late, &notifier).unwrap();
    assert_eq!(report.no_shows, 1);

    let slot = store.get_slot(slot_id).unwrap();
    assert_eq!(slot.status, SlotStatus::NoShow);

    let worker = store.get_worker(worker_id).unwrap();
    assert!((worker.attendance - 99.0).abs() < 1e-9);
    assert!(
        notifier
            .kinds_for("mila@example.com")
            .contains(&NoticeKind::NoShowRecorded)
    );
}

#[test]
fn test_unreviewed_checkout_is_accepted_without_rating() {
    let mut store = helpers::store();
    let (slot_id, worker_id, _) = assigned_fixture(&mut store);
    helpers::promote_slot(&mut store, slot_id);

    let notifier = helpers::RecordingNotifier::new();
    handlers::submit_checkout(
        &mut store,
        &notifier,
        SubmitCheckoutRequest {
            slot_id,
            start_time: "14:00".to_string(),
            end_time: "18:00".to_string(),
            break_minutes: 30,
            rating: None,
            feedback: None,
        },
    )
    .unwrap();

    let clock = helpers::clock_at(datetime!(2026-05-03 12:00 UTC));
    let report = run_settlement_sweep(&mut store, &clock, &notifier).unwrap();
    assert_eq!(report.auto_accepted, 1);

    let slot = store.get_slot(slot_id).unwrap();
    assert_eq!(slot.status, SlotStatus::CheckoutAccepted);

    // No rating was folded in on the employer's behalf.
    let worker = store.get_worker(worker_id).unwrap();
    assert_eq!(worker.rating_count, 0);
    assert!((worker.rating - 5.0).abs() < f64::EPSILON);
    assert!(
        notifier
            .kinds_for("mila@example.com")
            .contains(&NoticeKind::CheckoutAccepted)
    );

    let second = run_settlement_sweep(&mut store, &clock, &notifier).unwrap();
    assert_eq!(second.auto_accepted, 0);
}

#[test]
fn test_expiry_clears_untouched_capacity_and_expires_applications() {
    let mut store = helpers::store();
    let employer_id = helpers::register_employer(&mut store, "Hotel Noord", "planning@noord.example");
    let worker_id = helpers::register_worker(&mut store, "Mila Jansen", "mila@example.com");
    let posting_id = helpers::publish_posting(&mut store, employer_id);

    let placeholder_id = handlers::apply_to_posting(
        &mut store,
        &crate::notify::LogNotifier,
        ApplyToPostingRequest {
            posting_id,
            worker_id,
        },
    )
    .unwrap()
    .slot_id
    .unwrap();

    let clock = helpers::clock_at(datetime!(2026-05-01 14:01 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let report = run_settlement_sweep(&mut store, &clock, &notifier).unwrap();

    assert_eq!(report.postings_expired, 1);
    assert_eq!(report.slots_deleted, 2);
    assert_eq!(report.slots_expired, 1);

    let posting = store.get_posting(posting_id).unwrap();
    assert_eq!(posting.status, PostingStatus::Expired);
    assert!(!posting.available);
    assert!(posting.open_slots.is_empty());

    let remaining = store.list_slots_for_posting(posting_id).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, placeholder_id);
    assert_eq!(remaining[0].status, SlotStatus::Expired);
}

#[test]
fn test_sweep_before_start_leaves_everything_alone() {
    let mut store = helpers::store();
    let (slot_id, _, posting_id) = assigned_fixture(&mut store);

    let clock = helpers::clock_at(datetime!(2026-04-30 12:00 UTC));
    let notifier = helpers::RecordingNotifier::new();
    let report = run_settlement_sweep(&mut store, &clock, &notifier).unwrap();

    assert_eq!(report, SweepReport::default());
    assert_eq!(
        store.get_slot(slot_id).unwrap().status,
        SlotStatus::Assigned
    );
    assert_eq!(
        store.get_posting(posting_id).unwrap().status,
        PostingStatus::Available
    );
}
