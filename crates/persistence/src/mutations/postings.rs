// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift posting mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{self, PostingIndex};
use crate::diesel_schema::postings;
use crate::error::PersistenceError;
use shiftflow_domain::{PostingId, ShiftPosting};

/// Creates a new shift posting and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the posting cannot be created.
pub fn create_posting(
    conn: &mut SqliteConnection,
    posting: &ShiftPosting,
) -> Result<ShiftPosting, PersistenceError> {
    debug!(
        "Creating posting '{}' for employer ID: {}",
        posting.title, posting.employer
    );

    let index: PostingIndex = data_models::posting_index(posting);
    let doc: String = data_models::encode(posting)?;
    diesel::insert_into(postings::table)
        .values((
            postings::employer_id.eq(index.employer_id),
            postings::status.eq(&index.status),
            postings::start_at_unix.eq(index.start_at_unix),
            postings::doc.eq(&doc),
        ))
        .execute(conn)?;

    let posting_id: i64 = conn.get_last_insert_rowid()?;

    let mut saved: ShiftPosting = posting.clone();
    saved.id = posting_id;
    let doc: String = data_models::encode(&saved)?;
    diesel::update(postings::table)
        .filter(postings::posting_id.eq(posting_id))
        .set(postings::doc.eq(&doc))
        .execute(conn)?;

    info!(posting_id, "Posting created");
    Ok(saved)
}

/// Updates an existing posting document and its indexed columns.
///
/// # Errors
///
/// Returns an error if the posting does not exist or the update fails.
pub fn update_posting(
    conn: &mut SqliteConnection,
    posting: &ShiftPosting,
) -> Result<(), PersistenceError> {
    debug!("Updating posting ID: {}", posting.id);

    let index: PostingIndex = data_models::posting_index(posting);
    let doc: String = data_models::encode(posting)?;
    let rows_affected: usize = diesel::update(postings::table)
        .filter(postings::posting_id.eq(posting.id))
        .set((
            postings::employer_id.eq(index.employer_id),
            postings::status.eq(&index.status),
            postings::start_at_unix.eq(index.start_at_unix),
            postings::doc.eq(&doc),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::PostingNotFound(posting.id));
    }
    Ok(())
}

/// Deletes a posting row.
///
/// Slots referencing the posting must be deleted first; the foreign key
/// constraint rejects the delete otherwise.
///
/// # Errors
///
/// Returns an error if the posting does not exist or the delete fails.
pub fn delete_posting(
    conn: &mut SqliteConnection,
    posting_id: PostingId,
) -> Result<(), PersistenceError> {
    info!("Deleting posting ID: {}", posting_id);

    let rows_affected: usize = diesel::delete(postings::table)
        .filter(postings::posting_id.eq(posting_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::PostingNotFound(posting_id));
    }
    Ok(())
}
