// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invoice queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models;
use crate::diesel_schema::invoices;
use crate::error::PersistenceError;
use shiftflow_domain::{Invoice, InvoiceId, InvoiceParty};

/// Retrieves an invoice by id.
///
/// # Errors
///
/// Returns an error if the invoice is not found or cannot be decoded.
pub fn get_invoice(
    conn: &mut SqliteConnection,
    invoice_id: InvoiceId,
) -> Result<Invoice, PersistenceError> {
    let doc: String = invoices::table
        .filter(invoices::invoice_id.eq(invoice_id))
        .select(invoices::doc)
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::InvoiceNotFound(invoice_id))?;

    data_models::decode(&doc)
}

/// Lists every invoice issued to a party, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a document cannot be decoded.
pub fn list_invoices_for_party(
    conn: &mut SqliteConnection,
    party: InvoiceParty,
) -> Result<Vec<Invoice>, PersistenceError> {
    let docs: Vec<String> = invoices::table
        .filter(invoices::party_kind.eq(party.kind_str()))
        .filter(invoices::party_id.eq(party.party_id()))
        .order(invoices::invoice_id.asc())
        .select(invoices::doc)
        .load(conn)?;

    docs.iter().map(|doc| data_models::decode(doc)).collect()
}
