// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use shiftflow_domain::{
    Employer, PostingStatus, ShiftPosting, ShiftSlot, SlotStatus, TimeWindow, Worker,
};
use time::macros::{date, time};
use time::{Date, OffsetDateTime, Time};

pub fn test_window() -> TimeWindow {
    TimeWindow {
        date: date!(2026 - 05 - 01),
        start: time!(14:00),
        end: time!(18:00),
    }
}

pub fn test_window_on(date: Date, start: Time, end: Time) -> TimeWindow {
    TimeWindow { date, start, end }
}

pub fn test_worker(id: i64) -> Worker {
    let mut worker = Worker::new(
        format!("Worker {id}"),
        format!("worker{id}@example.com"),
    );
    worker.id = id;
    worker
}

pub fn test_employer(id: i64) -> Employer {
    let mut employer = Employer::new(String::from("Cafe Noord"), String::from("cafe@example.com"));
    employer.id = id;
    employer
}

pub fn test_posting(id: i64, capacity: u32) -> ShiftPosting {
    ShiftPosting {
        id,
        employer: 10,
        employer_name: String::from("Cafe Noord"),
        title: String::from("Bartender evening shift"),
        function: String::from("Bartender"),
        address: String::from("Kanaalstraat 1"),
        window: test_window(),
        break_minutes: 30,
        hourly_rate: Decimal::new(1500, 2),
        skills: Vec::new(),
        dress_code: None,
        capacity,
        flexpools: Vec::new(),
        applications: Vec::new(),
        accepted: Vec::new(),
        reserves: Vec::new(),
        open_slots: Vec::new(),
        available: true,
        status: PostingStatus::Available,
    }
}

pub fn test_open_slot(id: i64, posting: &ShiftPosting) -> ShiftSlot {
    let mut slot = ShiftSlot::open_for(posting);
    slot.id = id;
    slot
}

pub fn test_assigned_slot(id: i64, posting: &ShiftPosting, worker: &Worker) -> ShiftSlot {
    let mut slot = ShiftSlot::open_for(posting);
    slot.id = id;
    slot.assign_worker(worker).unwrap();
    slot
}

pub fn slot_in_status(
    id: i64,
    posting: &ShiftPosting,
    worker: &Worker,
    status: SlotStatus,
) -> ShiftSlot {
    let mut slot = test_assigned_slot(id, posting, worker);
    slot.status = status;
    slot
}

/// A reference instant well before the test window's start.
pub fn long_before_shift() -> OffsetDateTime {
    date!(2026 - 04 - 20).midnight().assume_utc()
}
