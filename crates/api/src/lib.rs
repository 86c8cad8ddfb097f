// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation boundary for the Shiftflow staffing engine.
//!
//! Handlers translate typed requests into core transitions, persist the
//! outcomes, and request notices and documents through collaborator
//! traits. The sweep entry points drive the time-based parts of the
//! slot lifecycle; an external scheduler owns the cadence.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod clock;
mod error;
mod handlers;
mod notify;
mod request_response;
mod sweep;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    accept_checkout, accept_worker, add_to_flexpool, apply_to_posting, create_draft_posting,
    create_flexpool, create_posting, delete_posting, employer_replace, mark_no_show,
    register_employer, register_worker, reject_checkout, reject_worker, remove_from_flexpool,
    submit_checkout, withdraw_application, worker_cancel,
};
pub use notify::{
    DocumentHandle, DocumentKind, DocumentRenderer, LogNotifier, NoticeKind, Notifier,
    NotifyError, NullRenderer,
};
pub use request_response::{
    AcceptCheckoutRequest, AcceptCheckoutResponse, AcceptWorkerRequest, AcceptWorkerResponse,
    AddToFlexPoolRequest, AddToFlexPoolResponse, ApplyToPostingRequest, ApplyToPostingResponse,
    CreateFlexPoolRequest, CreateFlexPoolResponse, CreatePostingRequest, CreatePostingResponse,
    CreatedPosting, DeletePostingRequest, DeletePostingResponse, EmployerReplaceRequest,
    EmployerReplaceResponse, MarkNoShowRequest, MarkNoShowResponse, RegisterEmployerRequest,
    RegisterEmployerResponse, RegisterWorkerRequest, RegisterWorkerResponse,
    RejectCheckoutRequest, RejectCheckoutResponse, RejectWorkerRequest, RejectWorkerResponse,
    RemoveFromFlexPoolRequest, RemoveFromFlexPoolResponse, SubmitCheckoutRequest,
    SubmitCheckoutResponse, WithdrawApplicationRequest, WithdrawApplicationResponse,
    WorkerCancelRequest, WorkerCancelResponse,
};
pub use sweep::{InvoiceSweepReport, SweepReport, generate_invoices, run_settlement_sweep};
