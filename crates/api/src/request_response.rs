// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates and clock times travel as strings (`YYYY-MM-DD`, `HH:MM`) and
//! are parsed at the boundary; money travels as [`rust_decimal::Decimal`].

use rust_decimal::Decimal;
use shiftflow_domain::{FlexPoolId, PostingId, SlotId, WorkerId};

/// API request to register a new worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterWorkerRequest {
    /// The worker's display name.
    pub name: String,
    /// The worker's email address, unique across workers.
    pub email: String,
}

/// API response for a successful worker registration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegisterWorkerResponse {
    /// The store-assigned worker identifier.
    pub worker_id: WorkerId,
    /// The worker's display name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to register a new employer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEmployerRequest {
    /// The employer's display name.
    pub name: String,
    /// The employer's email address, unique across employers.
    pub email: String,
}

/// API response for a successful employer registration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegisterEmployerResponse {
    /// The store-assigned employer identifier.
    pub employer_id: i64,
    /// The employer's display name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to create a flexpool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFlexPoolRequest {
    /// The owning employer.
    pub employer_id: i64,
    /// The pool's display title.
    pub title: String,
}

/// API response for a successful flexpool creation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CreateFlexPoolResponse {
    /// The store-assigned flexpool identifier.
    pub flexpool_id: FlexPoolId,
    /// The owning employer.
    pub employer_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to add a worker to a flexpool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToFlexPoolRequest {
    /// The target flexpool.
    pub flexpool_id: FlexPoolId,
    /// The worker to add.
    pub worker_id: WorkerId,
}

/// API response for a flexpool addition.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AddToFlexPoolResponse {
    /// The target flexpool.
    pub flexpool_id: FlexPoolId,
    /// The worker that was added.
    pub worker_id: WorkerId,
    /// True when the worker was already a member and nothing changed.
    pub already_member: bool,
    /// A status message.
    pub message: String,
}

/// API request to remove a worker from a flexpool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveFromFlexPoolRequest {
    /// The target flexpool.
    pub flexpool_id: FlexPoolId,
    /// The worker to remove.
    pub worker_id: WorkerId,
}

/// API response for a flexpool removal.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RemoveFromFlexPoolResponse {
    /// The target flexpool.
    pub flexpool_id: FlexPoolId,
    /// The worker that was removed.
    pub worker_id: WorkerId,
    /// False when the worker was not a member and nothing changed.
    pub removed: bool,
    /// A status message.
    pub message: String,
}

/// API request to create one or more shift postings.
///
/// Each entry in `dates` becomes its own posting with the same times,
/// rate, and tags. An empty date list is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostingRequest {
    /// The publishing employer.
    pub employer_id: i64,
    /// The posting title.
    pub title: String,
    /// Role or job function being staffed.
    pub function: String,
    /// Work address.
    pub address: String,
    /// Shift dates, `YYYY-MM-DD`, one posting per entry.
    pub dates: Vec<String>,
    /// Scheduled start time, `HH:MM`.
    pub start_time: String,
    /// Scheduled end time, `HH:MM`. An end at or before the start rolls
    /// into the next day.
    pub end_time: String,
    /// Unpaid break in minutes.
    pub break_minutes: u32,
    /// Hourly rate offered, excluding VAT.
    pub hourly_rate: Decimal,
    /// Required skills.
    pub skills: Vec<String>,
    /// Dress code, if any.
    pub dress_code: Option<String>,
    /// Number of workers wanted per posting.
    pub capacity: u32,
    /// Flexpools whose members skip the application queue. Each pool
    /// must belong to the publishing employer.
    pub flexpool_ids: Vec<FlexPoolId>,
}

/// One posting created by a [`CreatePostingRequest`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreatedPosting {
    /// The store-assigned posting identifier.
    pub posting_id: PostingId,
    /// The shift date, `YYYY-MM-DD`.
    pub date: String,
    /// Open slot rows created for the posting's capacity.
    pub open_slots: usize,
    /// The posting status, `available` or `draft`.
    pub status: String,
}

/// API response for a successful posting creation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CreatePostingResponse {
    /// The created postings, one per requested date.
    pub postings: Vec<CreatedPosting>,
    /// A success message.
    pub message: String,
}

/// API request to delete a posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePostingRequest {
    /// The posting to delete.
    pub posting_id: PostingId,
    /// Delete even when the posting has members or has not started.
    pub force: bool,
}

/// API response for a successful posting deletion.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeletePostingResponse {
    /// The deleted posting.
    pub posting_id: PostingId,
    /// Slot rows removed along with it.
    pub deleted_slots: usize,
    /// A success message.
    pub message: String,
}

/// API request for a worker to apply to a posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyToPostingRequest {
    /// The target posting.
    pub posting_id: PostingId,
    /// The applying worker.
    pub worker_id: WorkerId,
}

/// API response for an application.
///
/// `applied: false` with an `already` membership is the structured
/// no-op for a duplicate application, not an error.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ApplyToPostingResponse {
    /// The target posting.
    pub posting_id: PostingId,
    /// The applying worker.
    pub worker_id: WorkerId,
    /// Whether this call changed anything.
    pub applied: bool,
    /// The worker's membership after the call: `applied`, `accepted`,
    /// or `reserve`.
    pub membership: String,
    /// The slot the worker holds, when one was created or taken.
    pub slot_id: Option<SlotId>,
    /// A status message.
    pub message: String,
}

/// API request for an employer to accept an applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptWorkerRequest {
    /// The target posting.
    pub posting_id: PostingId,
    /// The applicant to accept.
    pub worker_id: WorkerId,
}

/// API response for an acceptance.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AcceptWorkerResponse {
    /// The target posting.
    pub posting_id: PostingId,
    /// The accepted worker.
    pub worker_id: WorkerId,
    /// `accepted` when the worker took an open slot, `reserve` when the
    /// posting was full.
    pub membership: String,
    /// The slot the worker now holds.
    pub slot_id: SlotId,
    /// Same-day applications cancelled because they conflict with the
    /// accepted shift.
    pub cancelled_conflicts: Vec<SlotId>,
    /// A success message.
    pub message: String,
}

/// API request for an employer to reject an applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectWorkerRequest {
    /// The target posting.
    pub posting_id: PostingId,
    /// The applicant to reject.
    pub worker_id: WorkerId,
}

/// API response for a rejection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RejectWorkerResponse {
    /// The target posting.
    pub posting_id: PostingId,
    /// The rejected worker.
    pub worker_id: WorkerId,
    /// A success message.
    pub message: String,
}

/// API request for a worker to withdraw a pending application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawApplicationRequest {
    /// The target posting.
    pub posting_id: PostingId,
    /// The withdrawing worker.
    pub worker_id: WorkerId,
}

/// API response for a withdrawal.
///
/// `withdrawn: false` is the structured no-op when the worker had no
/// pending application.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WithdrawApplicationResponse {
    /// The target posting.
    pub posting_id: PostingId,
    /// The withdrawing worker.
    pub worker_id: WorkerId,
    /// Whether an application was actually removed.
    pub withdrawn: bool,
    /// A status message.
    pub message: String,
}

/// API request for a worker to cancel their assigned slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerCancelRequest {
    /// The slot being cancelled.
    pub slot_id: SlotId,
}

/// API response for a worker cancellation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorkerCancelResponse {
    /// The cancelled slot.
    pub slot_id: SlotId,
    /// The slot status after the call, `cancelled` or `settled`.
    pub status: String,
    /// True when the cancellation fell inside the 24 hour window and
    /// the slot was billed as worked.
    pub billed: bool,
    /// A status message.
    pub message: String,
}

/// API request for an employer to release the assigned worker from a
/// slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployerReplaceRequest {
    /// The slot being vacated.
    pub slot_id: SlotId,
}

/// API response for a release.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EmployerReplaceResponse {
    /// The vacated slot.
    pub slot_id: SlotId,
    /// The slot status after the call.
    pub status: String,
    /// The reserve worker promoted into the slot, when one existed.
    pub promoted_worker_id: Option<WorkerId>,
    /// True when the slot reopened for new assignments.
    pub reopened: bool,
    /// A status message.
    pub message: String,
}

/// API request for a worker to submit their checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitCheckoutRequest {
    /// The slot being checked out.
    pub slot_id: SlotId,
    /// Reported start time, `HH:MM`.
    pub start_time: String,
    /// Reported end time, `HH:MM`.
    pub end_time: String,
    /// Reported unpaid break in minutes.
    pub break_minutes: u32,
    /// Worker's rating of the employer, 0 to 5.
    pub rating: Option<f64>,
    /// Worker's feedback text.
    pub feedback: Option<String>,
}

/// API response for a checkout submission.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubmitCheckoutResponse {
    /// The checked-out slot.
    pub slot_id: SlotId,
    /// The slot status after the call.
    pub status: String,
    /// The employer's recomputed rating, when the report carried one.
    pub employer_rating: Option<f64>,
    /// A success message.
    pub message: String,
}

/// API request for an employer to accept a submitted checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptCheckoutRequest {
    /// The slot under review.
    pub slot_id: SlotId,
    /// Employer's rating of the worker, 0 to 5.
    pub rating: f64,
    /// Whether the worker arrived late.
    pub late: bool,
    /// Employer's remark on the checkout.
    pub remark: Option<String>,
}

/// API response for a checkout acceptance.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AcceptCheckoutResponse {
    /// The reviewed slot.
    pub slot_id: SlotId,
    /// The slot status after the call.
    pub status: String,
    /// The worker's updated running rating.
    pub worker_rating: f64,
    /// A success message.
    pub message: String,
}

/// API request for an employer to reject a submitted checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectCheckoutRequest {
    /// The slot under review.
    pub slot_id: SlotId,
    /// Employer's remark explaining the rejection.
    pub remark: Option<String>,
    /// Whether the worker arrived late.
    pub late: bool,
}

/// API response for a checkout rejection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RejectCheckoutResponse {
    /// The reviewed slot.
    pub slot_id: SlotId,
    /// The slot status after the call.
    pub status: String,
    /// A status message.
    pub message: String,
}

/// API request to mark an awaited checkout as a no-show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkNoShowRequest {
    /// The slot whose worker never reported.
    pub slot_id: SlotId,
}

/// API response for a no-show.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarkNoShowResponse {
    /// The affected slot.
    pub slot_id: SlotId,
    /// The slot status after the call.
    pub status: String,
    /// The worker's decayed attendance score.
    pub attendance: f64,
    /// A status message.
    pub message: String,
}
