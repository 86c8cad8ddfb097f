// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use time::macros::datetime;

use crate::tests::seeded_store;
use crate::{Persistence, PersistenceError};
use shiftflow_domain::{Invoice, InvoiceParty};

fn invoice_for(party: InvoiceParty, total_cents: i64) -> Invoice {
    Invoice {
        id: 0,
        party,
        slots: vec![100, 101],
        week: 19,
        year: 2026,
        issued_at: datetime!(2026-05-04 00:00 UTC),
        total: Decimal::new(total_cents, 2),
    }
}

#[test]
fn test_create_invoice_assigns_id_and_round_trips() {
    let (mut store, worker, _, _) = seeded_store();

    let saved = store
        .create_invoice(&invoice_for(InvoiceParty::Worker(worker.id), 13613))
        .unwrap();
    assert!(saved.id > 0);

    let fetched = store.get_invoice(saved.id).unwrap();
    assert_eq!(fetched, saved);
    assert_eq!(fetched.total, Decimal::new(13613, 2));
    assert_eq!(fetched.party, InvoiceParty::Worker(worker.id));
    assert_eq!(fetched.week, 19);
}

#[test]
fn test_get_missing_invoice_fails() {
    let mut store = Persistence::new_in_memory().unwrap();
    assert!(matches!(
        store.get_invoice(12),
        Err(PersistenceError::InvoiceNotFound(12))
    ));
}

#[test]
fn test_invoices_listed_per_party_kind() {
    let (mut store, worker, employer, _) = seeded_store();

    let worker_invoice = store
        .create_invoice(&invoice_for(InvoiceParty::Worker(worker.id), 13613))
        .unwrap();
    let employer_invoice = store
        .create_invoice(&invoice_for(InvoiceParty::Employer(employer.id), 15881))
        .unwrap();

    let for_worker = store
        .list_invoices_for_party(InvoiceParty::Worker(worker.id))
        .unwrap();
    assert_eq!(
        for_worker.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![worker_invoice.id]
    );

    // Same numeric id under a different kind must not leak across.
    let for_employer = store
        .list_invoices_for_party(InvoiceParty::Employer(employer.id))
        .unwrap();
    assert_eq!(
        for_employer.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![employer_invoice.id]
    );

    assert!(
        store
            .list_invoices_for_party(InvoiceParty::Employer(worker.id + employer.id))
            .unwrap()
            .is_empty()
    );
}
