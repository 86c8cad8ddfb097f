// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Shiftflow staffing engine.
//!
//! This crate stores workers, employers, flexpools, shift postings,
//! shift slots, and invoices in `SQLite` via Diesel. Each entity is a
//! JSON document in a `doc` column with the columns the sweeps and
//! handlers filter on duplicated alongside it.
//!
//! ## Backend
//!
//! `SQLite` is the only backend:
//!
//! - In-memory databases for unit and integration tests
//! - File-based databases (WAL mode) for deployments
//!
//! Migrations are embedded and run at connection time, so a fresh
//! database file is usable immediately.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Date, OffsetDateTime};

use shiftflow_domain::{
    Employer, EmployerId, FlexPool, FlexPoolId, Invoice, InvoiceId, InvoiceParty, PostingId,
    PostingStatus, ShiftPosting, ShiftSlot, SlotId, SlotStatus, Worker, WorkerId,
};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Persistence adapter for the staffing store.
///
/// Construction establishes the connection, applies migrations, and
/// verifies foreign key enforcement; every later call is plain queries
/// and mutations against the live connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file databases
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Workers, Employers & Flexpools
    // ========================================================================

    /// Creates a worker and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker cannot be created, including when
    /// the email address is already registered.
    pub fn create_worker(&mut self, worker: &Worker) -> Result<Worker, PersistenceError> {
        mutations::create_worker(&mut self.conn, worker)
    }

    /// Updates a worker document.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker does not exist.
    pub fn update_worker(&mut self, worker: &Worker) -> Result<(), PersistenceError> {
        mutations::update_worker(&mut self.conn, worker)
    }

    /// Retrieves a worker by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker is not found.
    pub fn get_worker(&mut self, worker_id: WorkerId) -> Result<Worker, PersistenceError> {
        queries::get_worker(&mut self.conn, worker_id)
    }

    /// Looks up a worker by email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_worker_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<Worker>, PersistenceError> {
        queries::find_worker_by_email(&mut self.conn, email)
    }

    /// Creates an employer and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the employer cannot be created, including
    /// when the email address is already registered.
    pub fn create_employer(&mut self, employer: &Employer) -> Result<Employer, PersistenceError> {
        mutations::create_employer(&mut self.conn, employer)
    }

    /// Updates an employer document.
    ///
    /// # Errors
    ///
    /// Returns an error if the employer does not exist.
    pub fn update_employer(&mut self, employer: &Employer) -> Result<(), PersistenceError> {
        mutations::update_employer(&mut self.conn, employer)
    }

    /// Retrieves an employer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the employer is not found.
    pub fn get_employer(&mut self, employer_id: EmployerId) -> Result<Employer, PersistenceError> {
        queries::get_employer(&mut self.conn, employer_id)
    }

    /// Looks up an employer by email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_employer_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<Employer>, PersistenceError> {
        queries::find_employer_by_email(&mut self.conn, email)
    }

    /// Creates a flexpool and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the flexpool cannot be created.
    pub fn create_flexpool(&mut self, pool: &FlexPool) -> Result<FlexPool, PersistenceError> {
        mutations::create_flexpool(&mut self.conn, pool)
    }

    /// Updates a flexpool document.
    ///
    /// # Errors
    ///
    /// Returns an error if the flexpool does not exist.
    pub fn update_flexpool(&mut self, pool: &FlexPool) -> Result<(), PersistenceError> {
        mutations::update_flexpool(&mut self.conn, pool)
    }

    /// Retrieves a flexpool by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the flexpool is not found.
    pub fn get_flexpool(&mut self, flexpool_id: FlexPoolId) -> Result<FlexPool, PersistenceError> {
        queries::get_flexpool(&mut self.conn, flexpool_id)
    }

    /// Lists the flexpools owned by an employer.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_flexpools_for_employer(
        &mut self,
        employer_id: EmployerId,
    ) -> Result<Vec<FlexPool>, PersistenceError> {
        queries::list_flexpools_for_employer(&mut self.conn, employer_id)
    }

    // ========================================================================
    // Shift Postings
    // ========================================================================

    /// Creates a posting and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the posting cannot be created.
    pub fn create_posting(
        &mut self,
        posting: &ShiftPosting,
    ) -> Result<ShiftPosting, PersistenceError> {
        mutations::create_posting(&mut self.conn, posting)
    }

    /// Updates a posting document and its indexed columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the posting does not exist.
    pub fn update_posting(&mut self, posting: &ShiftPosting) -> Result<(), PersistenceError> {
        mutations::update_posting(&mut self.conn, posting)
    }

    /// Deletes a posting along with all of its slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the posting does not exist or the delete fails.
    pub fn delete_posting(&mut self, posting_id: PostingId) -> Result<(), PersistenceError> {
        mutations::delete_slots_for_posting(&mut self.conn, posting_id)?;
        mutations::delete_posting(&mut self.conn, posting_id)
    }

    /// Retrieves a posting by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the posting is not found.
    pub fn get_posting(&mut self, posting_id: PostingId) -> Result<ShiftPosting, PersistenceError> {
        queries::get_posting(&mut self.conn, posting_id)
    }

    /// Lists the postings published by an employer.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_postings_for_employer(
        &mut self,
        employer_id: EmployerId,
    ) -> Result<Vec<ShiftPosting>, PersistenceError> {
        queries::list_postings_for_employer(&mut self.conn, employer_id)
    }

    /// Lists postings in the given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_postings_by_status(
        &mut self,
        status: PostingStatus,
    ) -> Result<Vec<ShiftPosting>, PersistenceError> {
        queries::list_postings_by_status(&mut self.conn, status)
    }

    /// Lists postings in the given status whose shift starts before `cutoff`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_postings_by_status_starting_before(
        &mut self,
        status: PostingStatus,
        cutoff: OffsetDateTime,
    ) -> Result<Vec<ShiftPosting>, PersistenceError> {
        queries::list_postings_by_status_starting_before(&mut self.conn, status, cutoff)
    }

    // ========================================================================
    // Shift Slots
    // ========================================================================

    /// Creates a slot and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be created.
    pub fn create_slot(&mut self, slot: &ShiftSlot) -> Result<ShiftSlot, PersistenceError> {
        mutations::create_slot(&mut self.conn, slot)
    }

    /// Updates a slot document and its indexed columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot does not exist.
    pub fn update_slot(&mut self, slot: &ShiftSlot) -> Result<(), PersistenceError> {
        mutations::update_slot(&mut self.conn, slot)
    }

    /// Deletes a slot row.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot does not exist.
    pub fn delete_slot(&mut self, slot_id: SlotId) -> Result<(), PersistenceError> {
        mutations::delete_slot(&mut self.conn, slot_id)
    }

    /// Retrieves a slot by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is not found.
    pub fn get_slot(&mut self, slot_id: SlotId) -> Result<ShiftSlot, PersistenceError> {
        queries::get_slot(&mut self.conn, slot_id)
    }

    /// Lists every slot belonging to a posting.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_slots_for_posting(
        &mut self,
        posting_id: PostingId,
    ) -> Result<Vec<ShiftSlot>, PersistenceError> {
        queries::list_slots_for_posting(&mut self.conn, posting_id)
    }

    /// Lists every slot held by a worker.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_slots_for_worker(
        &mut self,
        worker_id: WorkerId,
    ) -> Result<Vec<ShiftSlot>, PersistenceError> {
        queries::list_slots_for_worker(&mut self.conn, worker_id)
    }

    /// Lists every slot in the given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_slots_by_status(
        &mut self,
        status: SlotStatus,
    ) -> Result<Vec<ShiftSlot>, PersistenceError> {
        queries::list_slots_by_status(&mut self.conn, status)
    }

    /// Lists every slot belonging to an employer's postings.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_slots_for_employer(
        &mut self,
        employer_id: EmployerId,
    ) -> Result<Vec<ShiftSlot>, PersistenceError> {
        queries::list_slots_for_employer(&mut self.conn, employer_id)
    }

    /// Lists slots in the given status whose shift starts at or before `cutoff`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_slots_by_status_starting_before(
        &mut self,
        status: SlotStatus,
        cutoff: OffsetDateTime,
    ) -> Result<Vec<ShiftSlot>, PersistenceError> {
        queries::list_slots_by_status_starting_before(&mut self.conn, status, cutoff)
    }

    /// Lists slots in the given status whose shift date is on or before `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_slots_by_status_on_or_before(
        &mut self,
        status: SlotStatus,
        date: Date,
    ) -> Result<Vec<ShiftSlot>, PersistenceError> {
        queries::list_slots_by_status_on_or_before(&mut self.conn, status, date)
    }

    /// Lists a worker's applied placeholder slots on a given date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_applied_slots_for_worker_on(
        &mut self,
        worker_id: WorkerId,
        date: Date,
    ) -> Result<Vec<ShiftSlot>, PersistenceError> {
        queries::list_applied_slots_for_worker_on(&mut self.conn, worker_id, date)
    }

    /// Finds a worker's applied placeholder slot on a posting, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_applied_slot(
        &mut self,
        posting_id: PostingId,
        worker_id: WorkerId,
    ) -> Result<Option<ShiftSlot>, PersistenceError> {
        queries::find_applied_slot(&mut self.conn, posting_id, worker_id)
    }

    /// Finds the oldest reserve slot on a posting, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_first_reserve_slot(
        &mut self,
        posting_id: PostingId,
    ) -> Result<Option<ShiftSlot>, PersistenceError> {
        queries::find_first_reserve_slot(&mut self.conn, posting_id)
    }

    /// Lists a party's slots with accepted checkouts awaiting settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_billable_slots_for_party(
        &mut self,
        party: InvoiceParty,
    ) -> Result<Vec<ShiftSlot>, PersistenceError> {
        queries::list_billable_slots_for_party(&mut self.conn, party)
    }

    // ========================================================================
    // Invoices
    // ========================================================================

    /// Creates an invoice and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice cannot be created.
    pub fn create_invoice(&mut self, invoice: &Invoice) -> Result<Invoice, PersistenceError> {
        mutations::create_invoice(&mut self.conn, invoice)
    }

    /// Retrieves an invoice by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice is not found.
    pub fn get_invoice(&mut self, invoice_id: InvoiceId) -> Result<Invoice, PersistenceError> {
        queries::get_invoice(&mut self.conn, invoice_id)
    }

    /// Lists every invoice issued to a party, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_invoices_for_party(
        &mut self,
        party: InvoiceParty,
    ) -> Result<Vec<Invoice>, PersistenceError> {
        queries::list_invoices_for_party(&mut self.conn, party)
    }
}
