// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Worker, employer, and flexpool mutations.
//!
//! Create mutations insert the document, read back the row id assigned
//! by the database, and write the id into the stored document so the
//! entity and its row always agree.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models;
use crate::diesel_schema::{employers, flexpools, workers};
use crate::error::PersistenceError;
use shiftflow_domain::{Employer, FlexPool, Worker};

/// Creates a new worker and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the worker cannot be created, including when the
/// email address is already registered.
pub fn create_worker(
    conn: &mut SqliteConnection,
    worker: &Worker,
) -> Result<Worker, PersistenceError> {
    debug!("Creating worker: {}", worker.email);

    let doc: String = data_models::encode(worker)?;
    diesel::insert_into(workers::table)
        .values((workers::email.eq(&worker.email), workers::doc.eq(&doc)))
        .execute(conn)?;

    let worker_id: i64 = conn.get_last_insert_rowid()?;

    let mut saved: Worker = worker.clone();
    saved.id = worker_id;
    let doc: String = data_models::encode(&saved)?;
    diesel::update(workers::table)
        .filter(workers::worker_id.eq(worker_id))
        .set(workers::doc.eq(&doc))
        .execute(conn)?;

    info!(worker_id, "Worker created");
    Ok(saved)
}

/// Updates an existing worker document.
///
/// # Errors
///
/// Returns an error if the worker does not exist or the update fails.
pub fn update_worker(
    conn: &mut SqliteConnection,
    worker: &Worker,
) -> Result<(), PersistenceError> {
    debug!("Updating worker ID: {}", worker.id);

    let doc: String = data_models::encode(worker)?;
    let rows_affected: usize = diesel::update(workers::table)
        .filter(workers::worker_id.eq(worker.id))
        .set((workers::email.eq(&worker.email), workers::doc.eq(&doc)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::WorkerNotFound(worker.id));
    }
    Ok(())
}

/// Creates a new employer and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the employer cannot be created, including when
/// the email address is already registered.
pub fn create_employer(
    conn: &mut SqliteConnection,
    employer: &Employer,
) -> Result<Employer, PersistenceError> {
    debug!("Creating employer: {}", employer.email);

    let doc: String = data_models::encode(employer)?;
    diesel::insert_into(employers::table)
        .values((employers::email.eq(&employer.email), employers::doc.eq(&doc)))
        .execute(conn)?;

    let employer_id: i64 = conn.get_last_insert_rowid()?;

    let mut saved: Employer = employer.clone();
    saved.id = employer_id;
    let doc: String = data_models::encode(&saved)?;
    diesel::update(employers::table)
        .filter(employers::employer_id.eq(employer_id))
        .set(employers::doc.eq(&doc))
        .execute(conn)?;

    info!(employer_id, "Employer created");
    Ok(saved)
}

/// Updates an existing employer document.
///
/// # Errors
///
/// Returns an error if the employer does not exist or the update fails.
pub fn update_employer(
    conn: &mut SqliteConnection,
    employer: &Employer,
) -> Result<(), PersistenceError> {
    debug!("Updating employer ID: {}", employer.id);

    let doc: String = data_models::encode(employer)?;
    let rows_affected: usize = diesel::update(employers::table)
        .filter(employers::employer_id.eq(employer.id))
        .set((employers::email.eq(&employer.email), employers::doc.eq(&doc)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::EmployerNotFound(employer.id));
    }
    Ok(())
}

/// Creates a new flexpool and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the flexpool cannot be created.
pub fn create_flexpool(
    conn: &mut SqliteConnection,
    pool: &FlexPool,
) -> Result<FlexPool, PersistenceError> {
    debug!("Creating flexpool for employer ID: {}", pool.employer);

    let doc: String = data_models::encode(pool)?;
    diesel::insert_into(flexpools::table)
        .values((
            flexpools::employer_id.eq(pool.employer),
            flexpools::doc.eq(&doc),
        ))
        .execute(conn)?;

    let flexpool_id: i64 = conn.get_last_insert_rowid()?;

    let mut saved: FlexPool = pool.clone();
    saved.id = flexpool_id;
    let doc: String = data_models::encode(&saved)?;
    diesel::update(flexpools::table)
        .filter(flexpools::flexpool_id.eq(flexpool_id))
        .set(flexpools::doc.eq(&doc))
        .execute(conn)?;

    info!(flexpool_id, "Flexpool created");
    Ok(saved)
}

/// Updates an existing flexpool document.
///
/// # Errors
///
/// Returns an error if the flexpool does not exist or the update fails.
pub fn update_flexpool(
    conn: &mut SqliteConnection,
    pool: &FlexPool,
) -> Result<(), PersistenceError> {
    debug!("Updating flexpool ID: {}", pool.id);

    let doc: String = data_models::encode(pool)?;
    let rows_affected: usize = diesel::update(flexpools::table)
        .filter(flexpools::flexpool_id.eq(pool.id))
        .set((
            flexpools::employer_id.eq(pool.employer),
            flexpools::doc.eq(&doc),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::FlexPoolNotFound(pool.id));
    }
    Ok(())
}
