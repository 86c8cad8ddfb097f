// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invoice mutations.
//!
//! Invoices are append-only. There is no update mutation: once an
//! invoice row is written it is never changed.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models;
use crate::diesel_schema::invoices;
use crate::error::PersistenceError;
use shiftflow_domain::Invoice;

/// Creates a new invoice and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the invoice cannot be created.
pub fn create_invoice(
    conn: &mut SqliteConnection,
    invoice: &Invoice,
) -> Result<Invoice, PersistenceError> {
    debug!(
        "Creating {} invoice for party ID: {} (week {} of {})",
        invoice.party.kind_str(),
        invoice.party.party_id(),
        invoice.week,
        invoice.year
    );

    let doc: String = data_models::encode(invoice)?;
    diesel::insert_into(invoices::table)
        .values((
            invoices::party_kind.eq(invoice.party.kind_str()),
            invoices::party_id.eq(invoice.party.party_id()),
            invoices::year.eq(invoice.year),
            invoices::week.eq(i32::from(invoice.week)),
            invoices::doc.eq(&doc),
        ))
        .execute(conn)?;

    let invoice_id: i64 = conn.get_last_insert_rowid()?;

    let mut saved: Invoice = invoice.clone();
    saved.id = invoice_id;
    let doc: String = data_models::encode(&saved)?;
    diesel::update(invoices::table)
        .filter(invoices::invoice_id.eq(invoice_id))
        .set(invoices::doc.eq(&doc))
        .execute(conn)?;

    info!(invoice_id, "Invoice created");
    Ok(saved)
}
