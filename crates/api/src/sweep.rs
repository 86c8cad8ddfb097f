// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sweep orchestration over the persisted working sets.
//!
//! The engine owns no timers; an external scheduler calls these entry
//! points on whatever cadence it likes. Every sweep is re-entrant: the
//! status guards in `shiftflow-core` make a second pass over already
//! processed records a no-op. A record that fails mid-sweep is logged
//! and skipped; the batch always finishes.

use std::collections::{BTreeMap, BTreeSet};

use shiftflow_core::{
    CHECKOUT_PROMOTION_DELAY, REVIEW_GRACE, SlotExpiry, aggregate_invoice, auto_accept_checkout,
    auto_accept_due, checkout_due, expire_posting, expire_slot, mark_no_show, no_show_due,
    posting_expired, promote_to_checkout, slot_expiry_action,
};
use shiftflow_domain::{InvoiceParty, PostingStatus, ShiftSlot, SlotId, SlotStatus};
use shiftflow_persistence::Persistence;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::error::{ApiError, translate_persistence_error};
use crate::notify::{DocumentKind, DocumentRenderer, NoticeKind, Notifier, notify_quietly};

/// Counts from one lifecycle sweep run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct SweepReport {
    /// Assigned slots promoted to `AwaitingCheckout`.
    pub promoted_to_checkout: usize,
    /// Awaited checkouts marked as no-shows.
    pub no_shows: usize,
    /// Submitted checkouts accepted on the employer's behalf.
    pub auto_accepted: usize,
    /// Published postings expired.
    pub postings_expired: usize,
    /// Pending slots marked expired.
    pub slots_expired: usize,
    /// Unassigned slot rows deleted.
    pub slots_deleted: usize,
    /// Records skipped because of an error.
    pub errors: usize,
}

/// Counts from one invoice generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct InvoiceSweepReport {
    /// Invoices written.
    pub invoices_created: usize,
    /// Billed slots moved to `Settled`.
    pub slots_settled: usize,
    /// Billable slots skipped as unbillable.
    pub skipped: usize,
    /// Records skipped because of an error.
    pub errors: usize,
}

/// Runs the four lifecycle sweeps: checkout promotion, no-show,
/// auto-accept, and expiry.
///
/// # Errors
///
/// Returns an error only when a working-set query fails; per-record
/// failures are logged and counted in the report instead.
pub fn run_settlement_sweep(
    store: &mut Persistence,
    clock: &dyn Clock,
    notifier: &dyn Notifier,
) -> Result<SweepReport, ApiError> {
    let now = clock.now();
    let today = now.date();
    let mut report = SweepReport::default();

    // Assigned slots whose shift has been running for at least an hour.
    let due = store
        .list_slots_by_status_starting_before(SlotStatus::Assigned, now - CHECKOUT_PROMOTION_DELAY)
        .map_err(translate_persistence_error)?;
    for slot in due {
        if !checkout_due(&slot, now) {
            continue;
        }
        let promoted = match promote_to_checkout(&slot) {
            Ok(updated) => updated,
            Err(e) => {
                warn!(slot_id = slot.id, error = %e, "Skipping checkout promotion");
                report.errors += 1;
                continue;
            }
        };
        if let Err(e) = store.update_slot(&promoted) {
            warn!(slot_id = slot.id, error = %e, "Failed to persist checkout promotion");
            report.errors += 1;
            continue;
        }
        if let Ok(worker_id) = promoted.assigned_worker() {
            match store.get_worker(worker_id) {
                Ok(worker) => notify_quietly(
                    notifier,
                    &worker.email,
                    NoticeKind::CheckoutRequested,
                    &promoted.title,
                ),
                Err(e) => {
                    warn!(slot_id = promoted.id, error = %e, "Missing worker for checkout notice");
                }
            }
        }
        report.promoted_to_checkout += 1;
    }

    // Awaited checkouts two or more days old become no-shows.
    let overdue = store
        .list_slots_by_status_on_or_before(SlotStatus::AwaitingCheckout, today - REVIEW_GRACE)
        .map_err(translate_persistence_error)?;
    for slot in overdue {
        if !no_show_due(&slot, today) {
            continue;
        }
        let worker = match slot.assigned_worker().map_err(|e| e.to_string()).and_then(
            |worker_id| {
                store
                    .get_worker(worker_id)
                    .map_err(|e| e.to_string())
            },
        ) {
            Ok(worker) => worker,
            Err(e) => {
                warn!(slot_id = slot.id, error = %e, "Skipping no-show");
                report.errors += 1;
                continue;
            }
        };
        let outcome = match mark_no_show(&slot, &worker) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(slot_id = slot.id, error = %e, "Skipping no-show");
                report.errors += 1;
                continue;
            }
        };
        if let Err(e) = store
            .update_slot(&outcome.slot)
            .and_then(|()| store.update_worker(&outcome.worker))
        {
            warn!(slot_id = slot.id, error = %e, "Failed to persist no-show");
            report.errors += 1;
            continue;
        }
        notify_quietly(
            notifier,
            &outcome.worker.email,
            NoticeKind::NoShowRecorded,
            &outcome.slot.title,
        );
        report.no_shows += 1;
    }

    // Submitted checkouts left unreviewed for two days are accepted
    // without a rating.
    let unreviewed = store
        .list_slots_by_status_on_or_before(SlotStatus::CheckoutSubmitted, today - REVIEW_GRACE)
        .map_err(translate_persistence_error)?;
    for slot in unreviewed {
        if !auto_accept_due(&slot, today) {
            continue;
        }
        let accepted = match auto_accept_checkout(&slot) {
            Ok(updated) => updated,
            Err(e) => {
                warn!(slot_id = slot.id, error = %e, "Skipping auto-accept");
                report.errors += 1;
                continue;
            }
        };
        if let Err(e) = store.update_slot(&accepted) {
            warn!(slot_id = slot.id, error = %e, "Failed to persist auto-accept");
            report.errors += 1;
            continue;
        }
        if let Ok(worker_id) = accepted.assigned_worker() {
            if let Ok(worker) = store.get_worker(worker_id) {
                notify_quietly(
                    notifier,
                    &worker.email,
                    NoticeKind::CheckoutAccepted,
                    &accepted.title,
                );
            }
        }
        report.auto_accepted += 1;
    }

    // Published postings whose start has passed expire, along with
    // their pending slots; untouched capacity is deleted outright.
    let stale = store
        .list_postings_by_status_starting_before(PostingStatus::Available, now)
        .map_err(translate_persistence_error)?;
    for posting in stale {
        if !posting_expired(&posting, now) {
            continue;
        }
        let expired = match expire_posting(&posting) {
            Ok(updated) => updated,
            Err(e) => {
                warn!(posting_id = posting.id, error = %e, "Skipping posting expiry");
                report.errors += 1;
                continue;
            }
        };
        if let Err(e) = store.update_posting(&expired) {
            warn!(posting_id = posting.id, error = %e, "Failed to persist posting expiry");
            report.errors += 1;
            continue;
        }
        let slots = match store.list_slots_for_posting(posting.id) {
            Ok(slots) => slots,
            Err(e) => {
                warn!(posting_id = posting.id, error = %e, "Cannot list slots of expired posting");
                report.errors += 1;
                continue;
            }
        };
        for slot in slots {
            match slot_expiry_action(&slot) {
                SlotExpiry::Delete => {
                    if let Err(e) = store.delete_slot(slot.id) {
                        warn!(slot_id = slot.id, error = %e, "Failed to delete open slot");
                        report.errors += 1;
                    } else {
                        report.slots_deleted += 1;
                    }
                }
                SlotExpiry::Expire => match expire_slot(&slot) {
                    Ok(updated) => {
                        if let Err(e) = store.update_slot(&updated) {
                            warn!(slot_id = slot.id, error = %e, "Failed to persist slot expiry");
                            report.errors += 1;
                        } else {
                            report.slots_expired += 1;
                        }
                    }
                    Err(e) => {
                        warn!(slot_id = slot.id, error = %e, "Skipping slot expiry");
                        report.errors += 1;
                    }
                },
                SlotExpiry::Keep => {}
            }
        }
        report.postings_expired += 1;
    }

    info!(
        promoted = report.promoted_to_checkout,
        no_shows = report.no_shows,
        auto_accepted = report.auto_accepted,
        postings_expired = report.postings_expired,
        errors = report.errors,
        "Lifecycle sweep finished"
    );

    Ok(report)
}

/// Aggregates every accepted checkout into weekly invoices, one per
/// party, then settles the consumed slots.
///
/// Both sides of each slot are billed from the same snapshot: the
/// worker's payout and the employer's charge are aggregated before any
/// slot moves to `Settled`, so neither side can miss a run.
///
/// # Errors
///
/// Returns an error only when a working-set query fails; per-party and
/// per-slot failures are logged and counted in the report instead.
pub fn generate_invoices(
    store: &mut Persistence,
    clock: &dyn Clock,
    notifier: &dyn Notifier,
    renderer: &dyn DocumentRenderer,
) -> Result<InvoiceSweepReport, ApiError> {
    let now = clock.now();
    let mut report = InvoiceSweepReport::default();

    let billable = store
        .list_slots_by_status(SlotStatus::CheckoutAccepted)
        .map_err(translate_persistence_error)?;
    if billable.is_empty() {
        return Ok(report);
    }

    let mut parties: Vec<InvoiceParty> = Vec::new();
    let mut seen_workers = BTreeSet::new();
    let mut seen_employers = BTreeSet::new();
    for slot in &billable {
        if let Some(worker_id) = slot.worker
            && seen_workers.insert(worker_id)
        {
            parties.push(InvoiceParty::Worker(worker_id));
        }
        if seen_employers.insert(slot.employer) {
            parties.push(InvoiceParty::Employer(slot.employer));
        }
    }

    let mut settled: BTreeMap<SlotId, ShiftSlot> = BTreeMap::new();
    let mut skipped: BTreeSet<SlotId> = BTreeSet::new();

    for party in parties {
        let slots = match store.list_billable_slots_for_party(party) {
            Ok(slots) => slots,
            Err(e) => {
                warn!(party = party.kind_str(), party_id = party.party_id(), error = %e, "Cannot list billable slots");
                report.errors += 1;
                continue;
            }
        };

        let run = match aggregate_invoice(party, &slots, now) {
            Ok(run) => run,
            Err(e) => {
                warn!(party = party.kind_str(), party_id = party.party_id(), error = %e, "Skipping party");
                report.errors += 1;
                continue;
            }
        };

        for (slot_id, reason) in &run.skipped {
            warn!(slot_id = slot_id, error = %reason, "Slot is not billable");
            skipped.insert(*slot_id);
        }

        let Some(invoice) = run.invoice else {
            continue;
        };

        let saved = match store.create_invoice(&invoice) {
            Ok(saved) => saved,
            Err(e) => {
                warn!(party = party.kind_str(), party_id = party.party_id(), error = %e, "Failed to write invoice");
                report.errors += 1;
                continue;
            }
        };
        report.invoices_created += 1;

        if let Some(handle) = renderer.render(
            DocumentKind::Invoice,
            &format!("invoice {} {} {}", saved.id, party.kind_str(), party.party_id()),
        ) {
            info!(invoice_id = saved.id, reference = handle.reference, "Rendered invoice document");
        }

        let attach_result = match party {
            InvoiceParty::Worker(worker_id) => {
                store.get_worker(worker_id).and_then(|mut worker| {
                    worker.invoices.push(saved.id);
                    let email = worker.email.clone();
                    store.update_worker(&worker)?;
                    Ok(email)
                })
            }
            InvoiceParty::Employer(employer_id) => {
                store.get_employer(employer_id).and_then(|mut employer| {
                    employer.invoices.push(saved.id);
                    let email = employer.email.clone();
                    store.update_employer(&employer)?;
                    Ok(email)
                })
            }
        };
        match attach_result {
            Ok(email) => notify_quietly(
                notifier,
                &email,
                NoticeKind::InvoiceIssued,
                &format!("week {} / {}", saved.week, saved.year),
            ),
            Err(e) => {
                warn!(invoice_id = saved.id, error = %e, "Failed to attach invoice to party");
                report.errors += 1;
            }
        }

        for slot in run.settled {
            settled.insert(slot.id, slot);
        }
    }

    // Settle each consumed slot once, after both sides were billed.
    for slot in settled.values() {
        if let Err(e) = store.update_slot(slot) {
            warn!(slot_id = slot.id, error = %e, "Failed to settle slot");
            report.errors += 1;
        } else {
            report.slots_settled += 1;
        }
    }

    report.skipped = skipped.len();

    info!(
        invoices = report.invoices_created,
        settled = report.slots_settled,
        skipped = report.skipped,
        errors = report.errors,
        "Invoice run finished"
    );

    Ok(report)
}
