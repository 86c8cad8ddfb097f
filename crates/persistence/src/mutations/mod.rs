// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for the persistence layer.
//!
//! This module contains all state-changing operations. Mutations use
//! Diesel DSL, with the `last_insert_rowid()` helper from the `backend`
//! module for id assignment.
//!
//! ## Module Organization
//!
//! - `parties` — Worker, employer, and flexpool mutations
//! - `postings` — Shift posting mutations
//! - `slots` — Shift slot mutations
//! - `invoices` — Invoice mutations

pub mod invoices;
pub mod parties;
pub mod postings;
pub mod slots;

pub use invoices::create_invoice;
pub use parties::{
    create_employer, create_flexpool, create_worker, update_employer, update_flexpool,
    update_worker,
};
pub use postings::{create_posting, delete_posting, update_posting};
pub use slots::{create_slot, delete_slot, delete_slots_for_posting, update_slot};
