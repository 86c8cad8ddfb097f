// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift slot queries.
//!
//! Sweeps and handlers never scan whole documents; every lookup here
//! goes through the indexed columns and decodes only the matching rows.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::{Date, OffsetDateTime};

use crate::data_models;
use crate::diesel_schema::slots;
use crate::error::PersistenceError;
use shiftflow_domain::{InvoiceParty, PostingId, ShiftSlot, SlotId, SlotStatus, WorkerId};

/// Retrieves a slot by id.
///
/// # Errors
///
/// Returns an error if the slot is not found or cannot be decoded.
pub fn get_slot(conn: &mut SqliteConnection, slot_id: SlotId) -> Result<ShiftSlot, PersistenceError> {
    let doc: String = slots::table
        .filter(slots::slot_id.eq(slot_id))
        .select(slots::doc)
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::SlotNotFound(slot_id))?;

    data_models::decode(&doc)
}

/// Lists every slot belonging to a posting.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_slots_for_posting(
    conn: &mut SqliteConnection,
    posting_id: PostingId,
) -> Result<Vec<ShiftSlot>, PersistenceError> {
    let docs: Vec<String> = slots::table
        .filter(slots::posting_id.eq(posting_id))
        .order(slots::slot_id.asc())
        .select(slots::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}

/// Lists every slot held by a worker.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_slots_for_worker(
    conn: &mut SqliteConnection,
    worker_id: WorkerId,
) -> Result<Vec<ShiftSlot>, PersistenceError> {
    let docs: Vec<String> = slots::table
        .filter(slots::worker_id.eq(worker_id))
        .order(slots::slot_id.asc())
        .select(slots::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}

/// Lists every slot in the given status.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_slots_by_status(
    conn: &mut SqliteConnection,
    status: SlotStatus,
) -> Result<Vec<ShiftSlot>, PersistenceError> {
    let docs: Vec<String> = slots::table
        .filter(slots::status.eq(status.as_str()))
        .order(slots::slot_id.asc())
        .select(slots::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}

/// Lists every slot belonging to an employer's postings.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_slots_for_employer(
    conn: &mut SqliteConnection,
    employer_id: i64,
) -> Result<Vec<ShiftSlot>, PersistenceError> {
    let docs: Vec<String> = slots::table
        .filter(slots::employer_id.eq(employer_id))
        .order(slots::slot_id.asc())
        .select(slots::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}

/// Lists slots in the given status whose shift starts before `cutoff`.
///
/// This drives the checkout promotion sweep.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_slots_by_status_starting_before(
    conn: &mut SqliteConnection,
    status: SlotStatus,
    cutoff: OffsetDateTime,
) -> Result<Vec<ShiftSlot>, PersistenceError> {
    let docs: Vec<String> = slots::table
        .filter(slots::status.eq(status.as_str()))
        .filter(slots::start_at_unix.le(cutoff.unix_timestamp()))
        .order(slots::slot_id.asc())
        .select(slots::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}

/// Lists slots in the given status whose shift date is on or before `date`.
///
/// This drives the no-show and auto-accept review sweeps, which work in
/// whole calendar days.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_slots_by_status_on_or_before(
    conn: &mut SqliteConnection,
    status: SlotStatus,
    date: Date,
) -> Result<Vec<ShiftSlot>, PersistenceError> {
    let date_key: String = data_models::date_key(date)?;
    let docs: Vec<String> = slots::table
        .filter(slots::status.eq(status.as_str()))
        .filter(slots::start_date.le(&date_key))
        .order(slots::slot_id.asc())
        .select(slots::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}

/// Lists a worker's applied placeholder slots on a given date.
///
/// Used to prune conflicting same-day applications after an acceptance.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_applied_slots_for_worker_on(
    conn: &mut SqliteConnection,
    worker_id: WorkerId,
    date: Date,
) -> Result<Vec<ShiftSlot>, PersistenceError> {
    let date_key: String = data_models::date_key(date)?;
    let docs: Vec<String> = slots::table
        .filter(slots::worker_id.eq(worker_id))
        .filter(slots::status.eq(SlotStatus::Applied.as_str()))
        .filter(slots::start_date.eq(&date_key))
        .order(slots::slot_id.asc())
        .select(slots::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}

/// Finds a worker's applied placeholder slot on a posting, if any.
///
/// # Errors
///
/// Returns an error if the query fails or the document cannot be decoded.
pub fn find_applied_slot(
    conn: &mut SqliteConnection,
    posting_id: PostingId,
    worker_id: WorkerId,
) -> Result<Option<ShiftSlot>, PersistenceError> {
    let doc: Option<String> = slots::table
        .filter(slots::posting_id.eq(posting_id))
        .filter(slots::worker_id.eq(worker_id))
        .filter(slots::status.eq(SlotStatus::Applied.as_str()))
        .select(slots::doc)
        .first(conn)
        .optional()?;

    doc.as_deref().map(data_models::decode).transpose()
}

/// Finds the oldest reserve slot on a posting, if any.
///
/// Reserve rows are consumed in insertion order, so the lowest id is
/// the next worker in line.
///
/// # Errors
///
/// Returns an error if the query fails or the document cannot be decoded.
pub fn find_first_reserve_slot(
    conn: &mut SqliteConnection,
    posting_id: PostingId,
) -> Result<Option<ShiftSlot>, PersistenceError> {
    let doc: Option<String> = slots::table
        .filter(slots::posting_id.eq(posting_id))
        .filter(slots::status.eq(SlotStatus::Reserve.as_str()))
        .order(slots::slot_id.asc())
        .select(slots::doc)
        .first(conn)
        .optional()?;

    doc.as_deref().map(data_models::decode).transpose()
}

/// Lists a party's slots with accepted checkouts awaiting settlement.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_billable_slots_for_party(
    conn: &mut SqliteConnection,
    party: InvoiceParty,
) -> Result<Vec<ShiftSlot>, PersistenceError> {
    let query = slots::table
        .filter(slots::status.eq(SlotStatus::CheckoutAccepted.as_str()))
        .order(slots::slot_id.asc())
        .select(slots::doc)
        .into_boxed();

    let docs: Vec<String> = match party {
        InvoiceParty::Worker(id) => query.filter(slots::worker_id.eq(id)).load(conn)?,
        InvoiceParty::Employer(id) => query.filter(slots::employer_id.eq(id)).load(conn)?,
    };

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}
