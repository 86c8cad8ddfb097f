// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Checkout submission and review transitions.

use crate::error::CoreError;
use shiftflow_domain::{
    Checkout, Employer, ShiftSlot, SlotStatus, Worker, apply_checkout_rating, apply_late_rejection,
    apply_no_show, recompute_employer_rating, validate_checkout_span, validate_rating,
};

/// The hours a worker reports after finishing a shift.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReport {
    /// Reported start time.
    pub start: time::Time,
    /// Reported end time.
    pub end: time::Time,
    /// Reported unpaid break in minutes.
    pub break_minutes: u32,
    /// Worker's rating of the employer, 0 to 5.
    pub rating: Option<f64>,
    /// Worker's feedback text.
    pub feedback: Option<String>,
}

/// Result of a worker submitting their checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    /// The slot, now `CheckoutSubmitted` with the report attached.
    pub slot: ShiftSlot,
    /// Employer with their rating recomputed, present when the report
    /// carried a rating.
    pub employer: Option<Employer>,
}

/// Submits a worker's checkout for employer review.
///
/// Valid from `AwaitingCheckout` and, for corrections, from
/// `CheckoutRejected`. When the report rates the employer, the
/// employer's average is recomputed over `employer_ratings`, which must
/// hold every checkout rating ever given to them including this one.
///
/// # Errors
///
/// Returns an error if the reported span or rating is invalid, or the
/// slot cannot transition to `CheckoutSubmitted`.
pub fn submit_checkout(
    slot: &ShiftSlot,
    employer: &Employer,
    report: CheckoutReport,
    employer_ratings: &[f64],
) -> Result<SubmitOutcome, CoreError> {
    validate_checkout_span(report.start, report.end, report.break_minutes)?;
    if let Some(rating) = report.rating {
        validate_rating(rating)?;
    }

    let mut updated = slot.clone();
    updated.assigned_worker()?;
    updated.transition_to(SlotStatus::CheckoutSubmitted)?;
    updated.checkout = Some(Checkout {
        start: report.start,
        end: report.end,
        break_minutes: report.break_minutes,
        rating: report.rating,
        feedback: report.feedback,
        remark: None,
    });

    let updated_employer = report.rating.map(|_| {
        let mut e = employer.clone();
        recompute_employer_rating(&mut e, employer_ratings);
        e
    });

    Ok(SubmitOutcome {
        slot: updated,
        employer: updated_employer,
    })
}

/// Result of an employer accepting a checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptCheckoutOutcome {
    /// The slot, now `CheckoutAccepted`.
    pub slot: ShiftSlot,
    /// Worker with the rating folded in and any lateness penalty
    /// applied.
    pub worker: Worker,
}

/// Accepts a submitted checkout, rating the worker.
///
/// The rating is folded into the worker's running average; `late`
/// additionally costs punctuality points.
///
/// # Errors
///
/// Returns an error if the rating is invalid or the slot is not in
/// `CheckoutSubmitted`.
pub fn accept_checkout(
    slot: &ShiftSlot,
    worker: &Worker,
    rating: f64,
    late: bool,
    remark: Option<String>,
) -> Result<AcceptCheckoutOutcome, CoreError> {
    validate_rating(rating)?;

    let mut updated = slot.clone();
    updated.transition_to(SlotStatus::CheckoutAccepted)?;
    if let Some(checkout) = updated.checkout.as_mut() {
        checkout.remark = remark;
    }

    let mut updated_worker = worker.clone();
    apply_checkout_rating(&mut updated_worker, rating, late);

    Ok(AcceptCheckoutOutcome {
        slot: updated,
        worker: updated_worker,
    })
}

/// Result of an employer rejecting a checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectCheckoutOutcome {
    /// The slot, now `CheckoutRejected` with the employer's remark.
    pub slot: ShiftSlot,
    /// Worker with the lateness penalty applied, present only when the
    /// rejection flagged a late arrival.
    pub worker: Option<Worker>,
}

/// Rejects a submitted checkout with a remark.
///
/// The worker may correct and resubmit. A `late` flag costs
/// punctuality even though no rating is recorded.
///
/// # Errors
///
/// Returns an error if the slot is not in `CheckoutSubmitted`.
pub fn reject_checkout(
    slot: &ShiftSlot,
    worker: &Worker,
    remark: Option<String>,
    late: bool,
) -> Result<RejectCheckoutOutcome, CoreError> {
    let mut updated = slot.clone();
    updated.transition_to(SlotStatus::CheckoutRejected)?;
    if let Some(checkout) = updated.checkout.as_mut() {
        checkout.remark = remark;
    }

    let updated_worker = late.then(|| {
        let mut w = worker.clone();
        apply_late_rejection(&mut w);
        w
    });

    Ok(RejectCheckoutOutcome {
        slot: updated,
        worker: updated_worker,
    })
}

/// Result of marking a worker as a no-show.
#[derive(Debug, Clone, PartialEq)]
pub struct NoShowOutcome {
    /// The slot, now `NoShow`.
    pub slot: ShiftSlot,
    /// Worker with the attendance penalty applied.
    pub worker: Worker,
}

/// Marks an awaited checkout as a no-show and decays the worker's
/// attendance score.
///
/// # Errors
///
/// Returns an error if the slot is not in `AwaitingCheckout`.
pub fn mark_no_show(slot: &ShiftSlot, worker: &Worker) -> Result<NoShowOutcome, CoreError> {
    let mut updated = slot.clone();
    updated.transition_to(SlotStatus::NoShow)?;

    let mut updated_worker = worker.clone();
    apply_no_show(&mut updated_worker);

    Ok(NoShowOutcome {
        slot: updated,
        worker: updated_worker,
    })
}
