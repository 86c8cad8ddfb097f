// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift posting queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;

use crate::data_models;
use crate::diesel_schema::postings;
use crate::error::PersistenceError;
use shiftflow_domain::{EmployerId, PostingId, PostingStatus, ShiftPosting};

/// Retrieves a posting by id.
///
/// # Errors
///
/// Returns an error if the posting is not found or cannot be decoded.
pub fn get_posting(
    conn: &mut SqliteConnection,
    posting_id: PostingId,
) -> Result<ShiftPosting, PersistenceError> {
    let doc: String = postings::table
        .filter(postings::posting_id.eq(posting_id))
        .select(postings::doc)
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::PostingNotFound(posting_id))?;

    data_models::decode(&doc)
}

/// Lists the postings published by an employer.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_postings_for_employer(
    conn: &mut SqliteConnection,
    employer_id: EmployerId,
) -> Result<Vec<ShiftPosting>, PersistenceError> {
    let docs: Vec<String> = postings::table
        .filter(postings::employer_id.eq(employer_id))
        .order(postings::posting_id.asc())
        .select(postings::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}

/// Lists postings in the given status.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_postings_by_status(
    conn: &mut SqliteConnection,
    status: PostingStatus,
) -> Result<Vec<ShiftPosting>, PersistenceError> {
    let docs: Vec<String> = postings::table
        .filter(postings::status.eq(status.as_str()))
        .order(postings::posting_id.asc())
        .select(postings::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}

/// Lists postings in the given status whose shift starts before `cutoff`.
///
/// This is the expiry sweep's working set: available postings whose
/// start has passed.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_postings_by_status_starting_before(
    conn: &mut SqliteConnection,
    status: PostingStatus,
    cutoff: OffsetDateTime,
) -> Result<Vec<ShiftPosting>, PersistenceError> {
    let docs: Vec<String> = postings::table
        .filter(postings::status.eq(status.as_str()))
        .filter(postings::start_at_unix.lt(cutoff.unix_timestamp()))
        .order(postings::posting_id.asc())
        .select(postings::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}
