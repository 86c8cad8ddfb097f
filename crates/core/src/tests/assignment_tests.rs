// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{test_open_slot, test_posting, test_worker};
use crate::{AcceptOutcome, ApplyOutcome, CoreError, accept_worker, apply_to_posting, reject_worker};
use shiftflow_domain::{DomainError, Membership, ShiftSlot, SlotStatus};

#[test]
fn test_apply_queues_application_with_placeholder() {
    let posting = test_posting(1, 2);
    let worker = test_worker(40);

    let outcome = apply_to_posting(&posting, &worker, None).unwrap();
    match outcome {
        ApplyOutcome::Queued {
            posting,
            placeholder,
            worker,
        } => {
            assert_eq!(posting.applications, vec![40]);
            assert_eq!(placeholder.status, SlotStatus::Applied);
            assert_eq!(placeholder.worker, Some(40));
            assert_eq!(placeholder.id, 0, "placeholder must be unsaved");
            assert_eq!(worker.applications, vec![1]);
        }
        other => panic!("Expected Queued, got {other:?}"),
    }
}

#[test]
fn test_apply_twice_is_a_structured_no_op() {
    let mut posting = test_posting(1, 2);
    let worker = test_worker(40);
    posting.record_application(40);

    let outcome = apply_to_posting(&posting, &worker, None).unwrap();
    assert_eq!(
        outcome,
        ApplyOutcome::AlreadyApplied {
            membership: Membership::Applied
        }
    );
}

#[test]
fn test_apply_blocked_while_accepted_or_reserve() {
    let mut posting = test_posting(1, 2);
    let worker = test_worker(40);

    posting.record_acceptance(40);
    assert_eq!(
        apply_to_posting(&posting, &worker, None).unwrap(),
        ApplyOutcome::AlreadyApplied {
            membership: Membership::Accepted
        }
    );

    posting.record_reserve(40);
    assert_eq!(
        apply_to_posting(&posting, &worker, None).unwrap(),
        ApplyOutcome::AlreadyApplied {
            membership: Membership::Reserve
        }
    );
}

#[test]
fn test_apply_to_unpublished_posting_fails() {
    let mut posting = test_posting(1, 2);
    posting.available = false;
    let worker = test_worker(40);

    let result = apply_to_posting(&posting, &worker, None);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::PostingUnavailable { posting_id: 1 }
        ))
    );
}

#[test]
fn test_flexpool_member_is_assigned_directly() {
    let mut posting = test_posting(1, 2);
    posting.flexpools = vec![7];
    let open = test_open_slot(100, &posting);
    posting.open_slots = vec![100];

    let mut worker = test_worker(40);
    worker.flexpools = vec![7];

    let outcome = apply_to_posting(&posting, &worker, Some(&open)).unwrap();
    match outcome {
        ApplyOutcome::DirectlyAssigned {
            posting,
            slot,
            worker,
        } => {
            assert_eq!(posting.accepted, vec![40]);
            assert!(posting.open_slots.is_empty());
            assert_eq!(slot.status, SlotStatus::Assigned);
            assert_eq!(slot.worker, Some(40));
            assert_eq!(worker.shifts, vec![100]);
        }
        other => panic!("Expected DirectlyAssigned, got {other:?}"),
    }
}

#[test]
fn test_flexpool_member_queues_when_no_open_slot() {
    let mut posting = test_posting(1, 1);
    posting.flexpools = vec![7];
    let mut worker = test_worker(40);
    worker.flexpools = vec![7];

    let outcome = apply_to_posting(&posting, &worker, None).unwrap();
    assert!(matches!(outcome, ApplyOutcome::Queued { .. }));
}

#[test]
fn test_accept_assigns_open_slot_and_drops_placeholder() {
    let mut posting = test_posting(1, 2);
    let mut worker = test_worker(40);
    let open = test_open_slot(100, &posting);
    posting.open_slots = vec![100];

    posting.record_application(40);
    worker.applications.push(1);
    let mut placeholder = ShiftSlot::application_for(&posting, &worker);
    placeholder.id = 200;
    worker.shifts.push(200);

    let outcome = accept_worker(&posting, &worker, Some(&open), Some(&placeholder)).unwrap();
    match outcome {
        AcceptOutcome::Assigned {
            posting,
            slot,
            worker,
            removed_placeholder,
        } => {
            assert_eq!(posting.accepted, vec![40]);
            assert!(posting.applications.is_empty());
            assert_eq!(slot.worker, Some(40));
            assert_eq!(removed_placeholder, Some(200));
            assert_eq!(worker.shifts, vec![100]);
            assert!(worker.applications.is_empty());
        }
        other => panic!("Expected Assigned, got {other:?}"),
    }
}

#[test]
fn test_accept_on_full_posting_creates_reserve() {
    let mut posting = test_posting(1, 1);
    let mut worker = test_worker(41);
    posting.accepted = vec![40];
    posting.record_application(41);
    worker.applications.push(1);

    let outcome = accept_worker(&posting, &worker, None, None).unwrap();
    match outcome {
        AcceptOutcome::Reserved {
            posting,
            reserve,
            worker,
            removed_placeholder,
        } => {
            assert_eq!(posting.accepted, vec![40], "capacity holder unchanged");
            assert_eq!(posting.reserves, vec![41]);
            assert_eq!(reserve.status, SlotStatus::Reserve);
            assert_eq!(reserve.worker, Some(41));
            assert_eq!(removed_placeholder, None);
            assert!(worker.applications.is_empty());
        }
        other => panic!("Expected Reserved, got {other:?}"),
    }
}

#[test]
fn test_capacity_invariant_holds_through_acceptances() {
    // Publish capacity 2, accept three applicants: the accepted list
    // never exceeds capacity, the overflow lands on reserves.
    let mut posting = test_posting(1, 2);
    posting.open_slots = vec![100, 101];

    for (worker_id, open_id) in [(40, Some(100)), (41, Some(101)), (42, None)] {
        let mut worker = test_worker(worker_id);
        posting.record_application(worker_id);
        worker.applications.push(1);

        let open_slot = open_id.map(|id| test_open_slot(id, &posting));
        let outcome = accept_worker(&posting, &worker, open_slot.as_ref(), None).unwrap();
        posting = match outcome {
            AcceptOutcome::Assigned { posting, .. } | AcceptOutcome::Reserved { posting, .. } => {
                posting
            }
        };
        assert!(posting.accepted.len() <= posting.capacity as usize);
    }

    assert_eq!(posting.accepted, vec![40, 41]);
    assert_eq!(posting.reserves, vec![42]);
}

#[test]
fn test_accept_without_application_fails() {
    let posting = test_posting(1, 2);
    let worker = test_worker(40);

    let result = accept_worker(&posting, &worker, None, None);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NoApplication {
            worker_id: 40,
            posting_id: 1
        }))
    );
}

#[test]
fn test_reject_clears_application_and_marks_placeholder() {
    let mut posting = test_posting(1, 2);
    let mut worker = test_worker(40);
    posting.record_application(40);
    worker.applications.push(1);
    let mut placeholder = ShiftSlot::application_for(&posting, &worker);
    placeholder.id = 200;
    worker.shifts.push(200);

    let outcome = reject_worker(&posting, &worker, Some(&placeholder)).unwrap();
    assert!(outcome.posting.applications.is_empty());
    assert!(outcome.worker.applications.is_empty());
    assert!(outcome.worker.shifts.is_empty());
    let rejected = outcome.rejected_placeholder.unwrap();
    assert_eq!(rejected.status, SlotStatus::Rejected);
}

#[test]
fn test_reject_without_application_fails() {
    let posting = test_posting(1, 2);
    let worker = test_worker(40);
    assert!(reject_worker(&posting, &worker, None).is_err());
}
