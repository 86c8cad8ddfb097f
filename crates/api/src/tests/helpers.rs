// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for the API tests.
//!
//! The standard posting runs 2026-05-01 from 14:00 to 18:00 at 15.00
//! per hour with a 30 minute break and capacity 2; tests that need a
//! different shape adjust the request before submitting it.

use std::cell::RefCell;

use rust_decimal::Decimal;
use shiftflow_domain::{PostingId, SlotId, SlotStatus, WorkerId};
use shiftflow_persistence::Persistence;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::clock::FixedClock;
use crate::handlers;
use crate::notify::{LogNotifier, NoticeKind, Notifier, NotifyError, NullRenderer};
use crate::request_response::{
    AcceptWorkerRequest, ApplyToPostingRequest, CreatePostingRequest, RegisterEmployerRequest,
    RegisterWorkerRequest,
};

/// Notifier that records every notice for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<(String, NoticeKind, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notice kinds delivered to one recipient, in order.
    pub fn kinds_for(&self, recipient: &str) -> Vec<NoticeKind> {
        self.notices
            .borrow()
            .iter()
            .filter(|(r, _, _)| r == recipient)
            .map(|(_, kind, _)| *kind)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, recipient: &str, kind: NoticeKind, context: &str) -> Result<(), NotifyError> {
        self.notices
            .borrow_mut()
            .push((recipient.to_string(), kind, context.to_string()));
        Ok(())
    }
}

/// Notifier whose deliveries always fail.
pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(&self, _recipient: &str, _kind: NoticeKind, _ctx: &str) -> Result<(), NotifyError> {
        Err(NotifyError {
            message: "mail service down".to_string(),
        })
    }
}

pub fn store() -> Persistence {
    Persistence::new_in_memory().expect("in-memory store")
}

pub fn register_worker(store: &mut Persistence, name: &str, email: &str) -> WorkerId {
    handlers::register_worker(
        store,
        &LogNotifier,
        RegisterWorkerRequest {
            name: name.to_string(),
            email: email.to_string(),
        },
    )
    .expect("register worker")
    .worker_id
}

pub fn register_employer(store: &mut Persistence, name: &str, email: &str) -> i64 {
    handlers::register_employer(
        store,
        &LogNotifier,
        RegisterEmployerRequest {
            name: name.to_string(),
            email: email.to_string(),
        },
    )
    .expect("register employer")
    .employer_id
}

/// The standard one-day posting request.
pub fn posting_request(employer_id: i64) -> CreatePostingRequest {
    CreatePostingRequest {
        employer_id,
        title: "Evening bar service".to_string(),
        function: "Bartender".to_string(),
        address: "Kanaalstraat 14, Utrecht".to_string(),
        dates: vec!["2026-05-01".to_string()],
        start_time: "14:00".to_string(),
        end_time: "18:00".to_string(),
        break_minutes: 30,
        hourly_rate: Decimal::new(1500, 2),
        skills: vec![],
        dress_code: None,
        capacity: 2,
        flexpool_ids: vec![],
    }
}

/// Publishes the standard posting and returns its id.
pub fn publish_posting(store: &mut Persistence, employer_id: i64) -> PostingId {
    handlers::create_posting(store, posting_request(employer_id))
        .expect("create posting")
        .postings[0]
        .posting_id
}

/// The scheduled start of the standard posting, as a UTC instant.
pub fn shift_start() -> OffsetDateTime {
    datetime!(2026-05-01 14:00 UTC)
}

pub fn clock_at(instant: OffsetDateTime) -> FixedClock {
    FixedClock::new(instant)
}

/// Applies and accepts the worker, returning the assigned slot id.
pub fn assign_worker(store: &mut Persistence, posting_id: PostingId, worker_id: WorkerId) -> SlotId {
    handlers::apply_to_posting(
        store,
        &LogNotifier,
        ApplyToPostingRequest {
            posting_id,
            worker_id,
        },
    )
    .expect("apply");
    handlers::accept_worker(
        store,
        &LogNotifier,
        &NullRenderer,
        AcceptWorkerRequest {
            posting_id,
            worker_id,
        },
    )
    .expect("accept")
    .slot_id
}

/// Moves an assigned slot to `AwaitingCheckout`, as the lifecycle sweep
/// would once the shift has been running for an hour.
pub fn promote_slot(store: &mut Persistence, slot_id: SlotId) {
    let mut slot = store.get_slot(slot_id).expect("slot");
    slot.transition_to(SlotStatus::AwaitingCheckout)
        .expect("promote");
    store.update_slot(&slot).expect("persist slot");
}
