// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assignment;
mod cancellation;
mod checkout;
mod conflict;
mod error;
mod settlement;
mod sweep;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use assignment::{
    AcceptOutcome, ApplyOutcome, RejectOutcome, accept_worker, apply_to_posting, reject_worker,
};
pub use cancellation::{
    CancelOutcome, EMPLOYER_RELEASE_BOUNDARY, LATE_CANCEL_BILLED_SPAN, Promotion, ReleaseOutcome,
    WORKER_CANCEL_BOUNDARY, WithdrawOutcome, employer_release, withdraw_application, worker_cancel,
};
pub use checkout::{
    AcceptCheckoutOutcome, CheckoutReport, NoShowOutcome, RejectCheckoutOutcome, SubmitOutcome,
    accept_checkout, mark_no_show, reject_checkout, submit_checkout,
};
pub use conflict::{ConflictResolution, resolve_conflicts};
pub use error::CoreError;
pub use settlement::{SettlementRun, aggregate_invoice};
pub use sweep::{
    CHECKOUT_PROMOTION_DELAY, REVIEW_GRACE, SlotExpiry, auto_accept_checkout, auto_accept_due,
    checkout_due, expire_posting, expire_slot, no_show_due, posting_expired, promote_to_checkout,
    slot_expiry_action,
};
