// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift slot mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{self, SlotIndex};
use crate::diesel_schema::slots;
use crate::error::PersistenceError;
use shiftflow_domain::{PostingId, ShiftSlot, SlotId};

/// Creates a new shift slot and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the slot cannot be created.
pub fn create_slot(
    conn: &mut SqliteConnection,
    slot: &ShiftSlot,
) -> Result<ShiftSlot, PersistenceError> {
    debug!("Creating slot for posting ID: {}", slot.posting);

    let index: SlotIndex = data_models::slot_index(slot)?;
    let doc: String = data_models::encode(slot)?;
    diesel::insert_into(slots::table)
        .values((
            slots::posting_id.eq(index.posting_id),
            slots::employer_id.eq(index.employer_id),
            slots::worker_id.eq(index.worker_id),
            slots::status.eq(&index.status),
            slots::start_at_unix.eq(index.start_at_unix),
            slots::start_date.eq(&index.start_date),
            slots::doc.eq(&doc),
        ))
        .execute(conn)?;

    let slot_id: i64 = conn.get_last_insert_rowid()?;

    let mut saved: ShiftSlot = slot.clone();
    saved.id = slot_id;
    let doc: String = data_models::encode(&saved)?;
    diesel::update(slots::table)
        .filter(slots::slot_id.eq(slot_id))
        .set(slots::doc.eq(&doc))
        .execute(conn)?;

    info!(slot_id, "Slot created");
    Ok(saved)
}

/// Updates an existing slot document and its indexed columns.
///
/// # Errors
///
/// Returns an error if the slot does not exist or the update fails.
pub fn update_slot(conn: &mut SqliteConnection, slot: &ShiftSlot) -> Result<(), PersistenceError> {
    debug!("Updating slot ID: {} to status {}", slot.id, slot.status);

    let index: SlotIndex = data_models::slot_index(slot)?;
    let doc: String = data_models::encode(slot)?;
    let rows_affected: usize = diesel::update(slots::table)
        .filter(slots::slot_id.eq(slot.id))
        .set((
            slots::posting_id.eq(index.posting_id),
            slots::employer_id.eq(index.employer_id),
            slots::worker_id.eq(index.worker_id),
            slots::status.eq(&index.status),
            slots::start_at_unix.eq(index.start_at_unix),
            slots::start_date.eq(&index.start_date),
            slots::doc.eq(&doc),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::SlotNotFound(slot.id));
    }
    Ok(())
}

/// Deletes a slot row.
///
/// Used for withdrawn application placeholders, consumed reserve rows,
/// and unfilled open slots on expired postings.
///
/// # Errors
///
/// Returns an error if the slot does not exist or the delete fails.
pub fn delete_slot(conn: &mut SqliteConnection, slot_id: SlotId) -> Result<(), PersistenceError> {
    info!("Deleting slot ID: {}", slot_id);

    let rows_affected: usize = diesel::delete(slots::table)
        .filter(slots::slot_id.eq(slot_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::SlotNotFound(slot_id));
    }
    Ok(())
}

/// Deletes every slot belonging to a posting.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_slots_for_posting(
    conn: &mut SqliteConnection,
    posting_id: PostingId,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::delete(slots::table)
        .filter(slots::posting_id.eq(posting_id))
        .execute(conn)?;

    info!(
        "Deleted {} slots for posting ID: {}",
        rows_affected, posting_id
    );
    Ok(rows_affected)
}
