// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for the persistence layer.
//!
//! This module contains all read-only queries.
//!
//! ## Module Organization
//!
//! - `parties` — Worker, employer, and flexpool queries
//! - `postings` — Shift posting queries
//! - `slots` — Shift slot queries, including sweep working sets
//! - `invoices` — Invoice queries

pub mod invoices;
pub mod parties;
pub mod postings;
pub mod slots;

pub use invoices::{get_invoice, list_invoices_for_party};
pub use parties::{
    find_employer_by_email, find_worker_by_email, get_employer, get_flexpool, get_worker,
    list_flexpools_for_employer,
};
pub use postings::{
    get_posting, list_postings_by_status, list_postings_by_status_starting_before,
    list_postings_for_employer,
};
pub use slots::{
    find_applied_slot, find_first_reserve_slot, get_slot, list_applied_slots_for_worker_on,
    list_billable_slots_for_party, list_slots_by_status, list_slots_by_status_on_or_before,
    list_slots_by_status_starting_before, list_slots_for_employer, list_slots_for_posting,
    list_slots_for_worker,
};
