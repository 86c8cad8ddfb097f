// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invoice aggregation over accepted checkouts.

use crate::error::CoreError;
use rust_decimal::Decimal;
use shiftflow_domain::{
    BillingSide, DomainError, Invoice, InvoiceParty, ShiftSlot, SlotId, SlotStatus, line_amount,
};
use time::OffsetDateTime;

/// Result of aggregating one party's accepted checkouts into an
/// invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementRun {
    /// The invoice draft (id 0, unsaved), absent when no slot was
    /// billable.
    pub invoice: Option<Invoice>,
    /// Consumed slots, now `Settled`. Ids match the invoice's slot
    /// list.
    pub settled: Vec<ShiftSlot>,
    /// Slots that could not be billed and were left untouched, with
    /// the reason. These never fail the batch.
    pub skipped: Vec<(SlotId, DomainError)>,
}

/// Aggregates a party's accepted checkouts into a single invoice.
///
/// Only slots in `CheckoutAccepted` are considered; anything else is
/// ignored so a re-run cannot double-bill. Slots with a missing or
/// invalid checkout, or a non-positive rate, are skipped with the
/// reason recorded. Line amounts are rounded to cents individually and
/// then summed.
///
/// # Errors
///
/// Returns an error only if a billable slot cannot transition to
/// `Settled`, which indicates a bookkeeping bug.
pub fn aggregate_invoice(
    party: InvoiceParty,
    slots: &[ShiftSlot],
    now: OffsetDateTime,
) -> Result<SettlementRun, CoreError> {
    let side = match party {
        InvoiceParty::Worker(_) => BillingSide::Worker,
        InvoiceParty::Employer(_) => BillingSide::Employer,
    };

    let mut total = Decimal::ZERO;
    let mut settled: Vec<ShiftSlot> = Vec::new();
    let mut skipped: Vec<(SlotId, DomainError)> = Vec::new();

    for slot in slots {
        if slot.status != SlotStatus::CheckoutAccepted {
            continue;
        }

        match line_amount(slot, side) {
            Ok(amount) => {
                let mut consumed = slot.clone();
                consumed.transition_to(SlotStatus::Settled)?;
                total += amount;
                settled.push(consumed);
            }
            Err(e) => skipped.push((slot.id, e)),
        }
    }

    let invoice = if settled.is_empty() {
        None
    } else {
        let (year, week, _) = now.date().to_iso_week_date();
        Some(Invoice {
            id: 0,
            party,
            slots: settled.iter().map(|s| s.id).collect(),
            week,
            year,
            issued_at: now,
            total,
        })
    };

    Ok(SettlementRun {
        invoice,
        settled,
        skipped,
    })
}
