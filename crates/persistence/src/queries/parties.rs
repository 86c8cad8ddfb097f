// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Worker, employer, and flexpool queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models;
use crate::diesel_schema::{employers, flexpools, workers};
use crate::error::PersistenceError;
use shiftflow_domain::{Employer, EmployerId, FlexPool, FlexPoolId, Worker, WorkerId};

/// Retrieves a worker by id.
///
/// # Errors
///
/// Returns an error if the worker is not found or cannot be decoded.
pub fn get_worker(
    conn: &mut SqliteConnection,
    worker_id: WorkerId,
) -> Result<Worker, PersistenceError> {
    let doc: String = workers::table
        .filter(workers::worker_id.eq(worker_id))
        .select(workers::doc)
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::WorkerNotFound(worker_id))?;

    data_models::decode(&doc)
}

/// Looks up a worker by email address.
///
/// # Errors
///
/// Returns an error if the query fails or the document cannot be decoded.
pub fn find_worker_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<Worker>, PersistenceError> {
    let doc: Option<String> = workers::table
        .filter(workers::email.eq(email))
        .select(workers::doc)
        .first(conn)
        .optional()?;

    doc.as_deref().map(data_models::decode).transpose()
}

/// Retrieves an employer by id.
///
/// # Errors
///
/// Returns an error if the employer is not found or cannot be decoded.
pub fn get_employer(
    conn: &mut SqliteConnection,
    employer_id: EmployerId,
) -> Result<Employer, PersistenceError> {
    let doc: String = employers::table
        .filter(employers::employer_id.eq(employer_id))
        .select(employers::doc)
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::EmployerNotFound(employer_id))?;

    data_models::decode(&doc)
}

/// Looks up an employer by email address.
///
/// # Errors
///
/// Returns an error if the query fails or the document cannot be decoded.
pub fn find_employer_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<Employer>, PersistenceError> {
    let doc: Option<String> = employers::table
        .filter(employers::email.eq(email))
        .select(employers::doc)
        .first(conn)
        .optional()?;

    doc.as_deref().map(data_models::decode).transpose()
}

/// Retrieves a flexpool by id.
///
/// # Errors
///
/// Returns an error if the flexpool is not found or cannot be decoded.
pub fn get_flexpool(
    conn: &mut SqliteConnection,
    flexpool_id: FlexPoolId,
) -> Result<FlexPool, PersistenceError> {
    let doc: String = flexpools::table
        .filter(flexpools::flexpool_id.eq(flexpool_id))
        .select(flexpools::doc)
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::FlexPoolNotFound(flexpool_id))?;

    data_models::decode(&doc)
}

/// Lists the flexpools owned by an employer.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_flexpools_for_employer(
    conn: &mut SqliteConnection,
    employer_id: EmployerId,
) -> Result<Vec<FlexPool>, PersistenceError> {
    let docs: Vec<String> = flexpools::table
        .filter(flexpools::employer_id.eq(employer_id))
        .order(flexpools::flexpool_id.asc())
        .select(flexpools::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}
