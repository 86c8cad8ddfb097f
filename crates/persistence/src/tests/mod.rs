// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod invoice_tests;
mod party_tests;
mod slot_tests;

use rust_decimal::Decimal;
use time::macros::{date, time};

use crate::Persistence;
use shiftflow_domain::{Employer, PostingStatus, ShiftPosting, TimeWindow, Worker};

pub fn create_test_worker(name: &str, email: &str) -> Worker {
    Worker::new(name.to_string(), email.to_string())
}

pub fn create_test_employer(name: &str, email: &str) -> Employer {
    Employer::new(name.to_string(), email.to_string())
}

/// An unsaved available posting on 2026-05-01, 14:00-18:00, at 15.00/h.
pub fn create_test_posting(employer: &Employer) -> ShiftPosting {
    ShiftPosting {
        id: 0,
        employer: employer.id,
        employer_name: employer.name.clone(),
        title: "Bartender evening shift".to_string(),
        function: "Bartender".to_string(),
        address: "Kanaalstraat 1".to_string(),
        window: TimeWindow {
            date: date!(2026 - 05 - 01),
            start: time!(14:00),
            end: time!(18:00),
        },
        break_minutes: 30,
        hourly_rate: Decimal::new(1500, 2),
        skills: vec![],
        dress_code: None,
        capacity: 2,
        flexpools: vec![],
        applications: vec![],
        accepted: vec![],
        reserves: vec![],
        open_slots: vec![],
        available: true,
        status: PostingStatus::Available,
    }
}

/// A fresh in-memory store seeded with one employer, one worker, and
/// one available posting.
pub fn seeded_store() -> (Persistence, Worker, Employer, ShiftPosting) {
    let mut store = Persistence::new_in_memory().unwrap();
    let employer = store
        .create_employer(&create_test_employer("Cafe Noord", "noord@example.com"))
        .unwrap();
    let worker = store
        .create_worker(&create_test_worker("Mila Jansen", "mila@example.com"))
        .unwrap();
    let posting = store
        .create_posting(&create_test_posting(&employer))
        .unwrap();
    (store, worker, employer, posting)
}
