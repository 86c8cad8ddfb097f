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

mod billing;
mod error;
mod posting;
mod scoring;
mod slot;
mod slot_status;
mod timeframe;
mod types;
mod validation;

pub use billing::{
    BillingSide, EMPLOYER_MARKUP, VAT_MULTIPLIER, billable_hours, line_amount, round_cents,
};
pub use error::DomainError;
pub use posting::{Membership, PostingStatus, ShiftPosting};
pub use scoring::{
    apply_checkout_rating, apply_late_rejection, apply_no_show, recompute_employer_rating,
    validate_rating,
};
pub use slot::{Checkout, ShiftSlot};
pub use slot_status::SlotStatus;
pub use timeframe::{
    DATE_FORMAT, FOLLOW_ON_GAP, TIME_FORMAT, TimeWindow, format_date, format_time, parse_date,
    parse_time,
};

// Re-export public types
pub use types::{
    Employer, EmployerId, FlexPool, FlexPoolId, Invoice, InvoiceId, InvoiceParty, PostingId,
    SlotId, Worker, WorkerId,
};
pub use validation::{validate_checkout_span, validate_posting_fields};
