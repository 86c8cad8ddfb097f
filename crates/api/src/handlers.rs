// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing operations.
//!
//! Each handler loads the entities an operation touches, runs the pure
//! transition from `shiftflow-core`, persists the outcome, and requests
//! any notices or documents. Handlers never compute transition rules
//! themselves; they orchestrate.

use shiftflow_core::{AcceptOutcome, ApplyOutcome, CancelOutcome, CheckoutReport, WithdrawOutcome};
use shiftflow_domain::{
    Employer, FlexPool, Membership, PostingStatus, ShiftPosting, ShiftSlot, SlotStatus, TimeWindow,
    Worker, parse_date, parse_time, validate_posting_fields,
};
use shiftflow_persistence::Persistence;
use tracing::info;

use crate::clock::Clock;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::notify::{DocumentKind, DocumentRenderer, NoticeKind, Notifier, notify_quietly};
use crate::request_response::{
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

/// Rejects empty or whitespace-only text fields.
fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} must not be empty"),
        });
    }
    Ok(())
}

/// Rejects addresses that cannot possibly be email addresses.
fn require_email(value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() || !value.contains('@') {
        return Err(ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("'{value}' is not a valid email address"),
        });
    }
    Ok(())
}

const fn membership_str(membership: Membership) -> &'static str {
    match membership {
        Membership::Applied => "applied",
        Membership::Accepted => "accepted",
        Membership::Reserve => "reserve",
    }
}

/// Registers a new worker.
///
/// # Errors
///
/// Returns an error if a field is invalid, the email address is
/// already registered, or the store fails.
pub fn register_worker(
    store: &mut Persistence,
    notifier: &dyn Notifier,
    request: RegisterWorkerRequest,
) -> Result<RegisterWorkerResponse, ApiError> {
    require_text("name", &request.name)?;
    require_email(&request.email)?;

    if store
        .find_worker_by_email(&request.email)
        .map_err(translate_persistence_error)?
        .is_some()
    {
        return Err(ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("'{}' is already registered", request.email),
        });
    }

    let saved = store
        .create_worker(&Worker::new(request.name, request.email))
        .map_err(translate_persistence_error)?;

    info!(worker_id = saved.id, "Registered worker");
    notify_quietly(notifier, &saved.email, NoticeKind::Welcome, &saved.name);

    Ok(RegisterWorkerResponse {
        worker_id: saved.id,
        name: saved.name,
        message: String::from("Worker registered"),
    })
}

/// Registers a new employer.
///
/// # Errors
///
/// Returns an error if a field is invalid, the email address is
/// already registered, or the store fails.
pub fn register_employer(
    store: &mut Persistence,
    notifier: &dyn Notifier,
    request: RegisterEmployerRequest,
) -> Result<RegisterEmployerResponse, ApiError> {
    require_text("name", &request.name)?;
    require_email(&request.email)?;

    if store
        .find_employer_by_email(&request.email)
        .map_err(translate_persistence_error)?
        .is_some()
    {
        return Err(ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("'{}' is already registered", request.email),
        });
    }

    let saved = store
        .create_employer(&Employer::new(request.name, request.email))
        .map_err(translate_persistence_error)?;

    info!(employer_id = saved.id, "Registered employer");
    notify_quietly(notifier, &saved.email, NoticeKind::Welcome, &saved.name);

    Ok(RegisterEmployerResponse {
        employer_id: saved.id,
        name: saved.name,
        message: String::from("Employer registered"),
    })
}

/// Creates an empty flexpool for an employer.
///
/// # Errors
///
/// Returns an error if the title is empty, the employer does not
/// exist, or the store fails.
pub fn create_flexpool(
    store: &mut Persistence,
    request: CreateFlexPoolRequest,
) -> Result<CreateFlexPoolResponse, ApiError> {
    require_text("title", &request.title)?;

    let mut employer = store
        .get_employer(request.employer_id)
        .map_err(translate_persistence_error)?;

    let saved = store
        .create_flexpool(&FlexPool::new(employer.id, request.title))
        .map_err(translate_persistence_error)?;

    employer.flexpools.push(saved.id);
    store
        .update_employer(&employer)
        .map_err(translate_persistence_error)?;

    info!(
        flexpool_id = saved.id,
        employer_id = employer.id,
        "Created flexpool"
    );

    Ok(CreateFlexPoolResponse {
        flexpool_id: saved.id,
        employer_id: employer.id,
        message: String::from("Flexpool created"),
    })
}

/// Adds a worker to a flexpool.
///
/// Adding a worker who is already a member is a structured no-op.
///
/// # Errors
///
/// Returns an error if the flexpool or worker does not exist, or the
/// store fails.
pub fn add_to_flexpool(
    store: &mut Persistence,
    request: AddToFlexPoolRequest,
) -> Result<AddToFlexPoolResponse, ApiError> {
    let mut pool = store
        .get_flexpool(request.flexpool_id)
        .map_err(translate_persistence_error)?;
    let mut worker = store
        .get_worker(request.worker_id)
        .map_err(translate_persistence_error)?;

    if pool.workers.contains(&worker.id) {
        return Ok(AddToFlexPoolResponse {
            flexpool_id: pool.id,
            worker_id: worker.id,
            already_member: true,
            message: String::from("Worker is already a member"),
        });
    }

    pool.workers.push(worker.id);
    worker.flexpools.push(pool.id);
    store
        .update_flexpool(&pool)
        .map_err(translate_persistence_error)?;
    store
        .update_worker(&worker)
        .map_err(translate_persistence_error)?;

    Ok(AddToFlexPoolResponse {
        flexpool_id: pool.id,
        worker_id: worker.id,
        already_member: false,
        message: String::from("Worker added to flexpool"),
    })
}

/// Removes a worker from a flexpool.
///
/// Removing a worker who is not a member is a structured no-op.
///
/// # Errors
///
/// Returns an error if the flexpool or worker does not exist, or the
/// store fails.
pub fn remove_from_flexpool(
    store: &mut Persistence,
    request: RemoveFromFlexPoolRequest,
) -> Result<RemoveFromFlexPoolResponse, ApiError> {
    let mut pool = store
        .get_flexpool(request.flexpool_id)
        .map_err(translate_persistence_error)?;
    let mut worker = store
        .get_worker(request.worker_id)
        .map_err(translate_persistence_error)?;

    if !pool.workers.contains(&worker.id) {
        return Ok(RemoveFromFlexPoolResponse {
            flexpool_id: pool.id,
            worker_id: worker.id,
            removed: false,
            message: String::from("Worker is not a member"),
        });
    }

    pool.workers.retain(|w| *w != worker.id);
    worker.flexpools.retain(|p| *p != pool.id);
    store
        .update_flexpool(&pool)
        .map_err(translate_persistence_error)?;
    store
        .update_worker(&worker)
        .map_err(translate_persistence_error)?;

    Ok(RemoveFromFlexPoolResponse {
        flexpool_id: pool.id,
        worker_id: worker.id,
        removed: true,
        message: String::from("Worker removed from flexpool"),
    })
}

/// Creates and publishes one posting per requested date.
///
/// Published postings are `Available` immediately and carry one open
/// slot row per unit of capacity.
///
/// # Errors
///
/// Returns an error if a field is invalid, a referenced flexpool does
/// not belong to the employer, or the store fails.
pub fn create_posting(
    store: &mut Persistence,
    request: CreatePostingRequest,
) -> Result<CreatePostingResponse, ApiError> {
    create_postings(store, request, true)
}

/// Creates one draft posting per requested date.
///
/// Drafts are invisible to workers and carry no slot rows until
/// published.
///
/// # Errors
///
/// Returns an error if a field is invalid, a referenced flexpool does
/// not belong to the employer, or the store fails.
pub fn create_draft_posting(
    store: &mut Persistence,
    request: CreatePostingRequest,
) -> Result<CreatePostingResponse, ApiError> {
    create_postings(store, request, false)
}

fn create_postings(
    store: &mut Persistence,
    request: CreatePostingRequest,
    publish: bool,
) -> Result<CreatePostingResponse, ApiError> {
    let mut employer = store
        .get_employer(request.employer_id)
        .map_err(translate_persistence_error)?;

    if request.dates.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("dates"),
            message: String::from("at least one date is required"),
        });
    }

    let start = parse_time(&request.start_time).map_err(translate_domain_error)?;
    let end = parse_time(&request.end_time).map_err(translate_domain_error)?;

    let mut pools: Vec<FlexPool> = Vec::with_capacity(request.flexpool_ids.len());
    for pool_id in &request.flexpool_ids {
        let pool = store
            .get_flexpool(*pool_id)
            .map_err(translate_persistence_error)?;
        if pool.employer != employer.id {
            return Err(ApiError::InvalidInput {
                field: String::from("flexpool_ids"),
                message: format!("flexpool {pool_id} does not belong to employer {}", employer.id),
            });
        }
        pools.push(pool);
    }

    let mut created: Vec<CreatedPosting> = Vec::with_capacity(request.dates.len());

    for date_string in &request.dates {
        let date = parse_date(date_string).map_err(translate_domain_error)?;
        let window = TimeWindow { date, start, end };
        validate_posting_fields(
            &request.title,
            request.hourly_rate,
            request.capacity,
            &window,
            request.break_minutes,
        )
        .map_err(translate_domain_error)?;

        let posting = ShiftPosting {
            id: 0,
            employer: employer.id,
            employer_name: employer.name.clone(),
            title: request.title.clone(),
            function: request.function.clone(),
            address: request.address.clone(),
            window,
            break_minutes: request.break_minutes,
            hourly_rate: request.hourly_rate,
            skills: request.skills.clone(),
            dress_code: request.dress_code.clone(),
            capacity: request.capacity,
            flexpools: request.flexpool_ids.clone(),
            applications: Vec::new(),
            accepted: Vec::new(),
            reserves: Vec::new(),
            open_slots: Vec::new(),
            available: publish,
            status: if publish {
                PostingStatus::Available
            } else {
                PostingStatus::Draft
            },
        };

        let mut saved = store
            .create_posting(&posting)
            .map_err(translate_persistence_error)?;

        if publish {
            for _ in 0..request.capacity {
                let slot = store
                    .create_slot(&ShiftSlot::open_for(&saved))
                    .map_err(translate_persistence_error)?;
                saved.open_slots.push(slot.id);
            }
            store
                .update_posting(&saved)
                .map_err(translate_persistence_error)?;
        }

        employer.postings.push(saved.id);
        for pool in &mut pools {
            pool.postings.push(saved.id);
        }

        info!(
            posting_id = saved.id,
            date = date_string,
            published = publish,
            "Created posting"
        );

        created.push(CreatedPosting {
            posting_id: saved.id,
            date: date_string.clone(),
            open_slots: saved.open_slots.len(),
            status: saved.status.as_str().to_string(),
        });
    }

    store
        .update_employer(&employer)
        .map_err(translate_persistence_error)?;
    for pool in &pools {
        store
            .update_flexpool(pool)
            .map_err(translate_persistence_error)?;
    }

    Ok(CreatePostingResponse {
        postings: created,
        message: if publish {
            String::from("Postings published")
        } else {
            String::from("Draft postings created")
        },
    })
}

/// Deletes a posting and all of its slot rows.
///
/// Without `force` this is only allowed once the shift start has
/// passed and nobody is on any membership list. Worker shift lists,
/// flexpool attachments, and the employer's posting list are detached
/// before the rows are removed.
///
/// # Errors
///
/// Returns an error if the posting does not exist, the conditions are
/// not met, or the store fails.
pub fn delete_posting(
    store: &mut Persistence,
    clock: &dyn Clock,
    request: DeletePostingRequest,
) -> Result<DeletePostingResponse, ApiError> {
    let posting = store
        .get_posting(request.posting_id)
        .map_err(translate_persistence_error)?;

    let started = posting.window.start_at().assume_utc() < clock.now();
    let has_members = !(posting.applications.is_empty()
        && posting.accepted.is_empty()
        && posting.reserves.is_empty());

    if !request.force && (!started || has_members) {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("posting_deletable"),
            message: format!(
                "posting {} can only be deleted after its start and without members, or forced",
                posting.id
            ),
        });
    }

    let slots = store
        .list_slots_for_posting(posting.id)
        .map_err(translate_persistence_error)?;

    for slot in &slots {
        if let Some(worker_id) = slot.worker {
            let mut worker = store
                .get_worker(worker_id)
                .map_err(translate_persistence_error)?;
            worker.shifts.retain(|s| *s != slot.id);
            worker.applications.retain(|p| *p != posting.id);
            store
                .update_worker(&worker)
                .map_err(translate_persistence_error)?;
        }
    }

    for pool_id in &posting.flexpools {
        let mut pool = store
            .get_flexpool(*pool_id)
            .map_err(translate_persistence_error)?;
        pool.postings.retain(|p| *p != posting.id);
        store
            .update_flexpool(&pool)
            .map_err(translate_persistence_error)?;
    }

    let mut employer = store
        .get_employer(posting.employer)
        .map_err(translate_persistence_error)?;
    employer.postings.retain(|p| *p != posting.id);
    store
        .update_employer(&employer)
        .map_err(translate_persistence_error)?;

    store
        .delete_posting(posting.id)
        .map_err(translate_persistence_error)?;

    info!(
        posting_id = posting.id,
        deleted_slots = slots.len(),
        forced = request.force,
        "Deleted posting"
    );

    Ok(DeletePostingResponse {
        posting_id: posting.id,
        deleted_slots: slots.len(),
        message: String::from("Posting deleted"),
    })
}

/// Applies a worker to a posting.
///
/// Flexpool members take the first open slot directly; everyone else
/// queues with an application placeholder. Applying twice is a
/// structured no-op.
///
/// # Errors
///
/// Returns an error if the posting or worker does not exist, the
/// posting is not accepting applications, or the store fails.
pub fn apply_to_posting(
    store: &mut Persistence,
    notifier: &dyn Notifier,
    request: ApplyToPostingRequest,
) -> Result<ApplyToPostingResponse, ApiError> {
    let posting = store
        .get_posting(request.posting_id)
        .map_err(translate_persistence_error)?;
    let worker = store
        .get_worker(request.worker_id)
        .map_err(translate_persistence_error)?;

    let open_slot = match posting.open_slots.first() {
        Some(slot_id) => Some(
            store
                .get_slot(*slot_id)
                .map_err(translate_persistence_error)?,
        ),
        None => None,
    };

    let outcome = shiftflow_core::apply_to_posting(&posting, &worker, open_slot.as_ref())
        .map_err(translate_core_error)?;

    match outcome {
        ApplyOutcome::AlreadyApplied { membership } => Ok(ApplyToPostingResponse {
            posting_id: posting.id,
            worker_id: worker.id,
            applied: false,
            membership: membership_str(membership).to_string(),
            slot_id: None,
            message: String::from("Worker already has a position on this posting"),
        }),
        ApplyOutcome::DirectlyAssigned {
            posting: updated_posting,
            slot,
            worker: updated_worker,
        } => {
            store.update_slot(&slot).map_err(translate_persistence_error)?;
            store
                .update_posting(&updated_posting)
                .map_err(translate_persistence_error)?;
            store
                .update_worker(&updated_worker)
                .map_err(translate_persistence_error)?;

            notify_quietly(
                notifier,
                &updated_worker.email,
                NoticeKind::ApplicationAccepted,
                &updated_posting.title,
            );

            Ok(ApplyToPostingResponse {
                posting_id: updated_posting.id,
                worker_id: updated_worker.id,
                applied: true,
                membership: String::from("accepted"),
                slot_id: Some(slot.id),
                message: String::from("Flexpool member assigned directly"),
            })
        }
        ApplyOutcome::Queued {
            posting: updated_posting,
            placeholder,
            worker: mut updated_worker,
        } => {
            let saved = store
                .create_slot(&placeholder)
                .map_err(translate_persistence_error)?;
            updated_worker.shifts.push(saved.id);

            store
                .update_posting(&updated_posting)
                .map_err(translate_persistence_error)?;
            store
                .update_worker(&updated_worker)
                .map_err(translate_persistence_error)?;

            let employer = store
                .get_employer(updated_posting.employer)
                .map_err(translate_persistence_error)?;
            notify_quietly(
                notifier,
                &employer.email,
                NoticeKind::ApplicationReceived,
                &updated_worker.name,
            );

            Ok(ApplyToPostingResponse {
                posting_id: updated_posting.id,
                worker_id: updated_worker.id,
                applied: true,
                membership: String::from("applied"),
                slot_id: Some(saved.id),
                message: String::from("Application queued for review"),
            })
        }
    }
}

/// Accepts a pending applicant.
///
/// With an open slot the worker is assigned and their conflicting
/// same-day applications are cancelled; on a full posting the worker
/// becomes a reserve.
///
/// # Errors
///
/// Returns an error if the posting or worker does not exist, the
/// worker has no pending application, or the store fails.
pub fn accept_worker(
    store: &mut Persistence,
    notifier: &dyn Notifier,
    renderer: &dyn DocumentRenderer,
    request: AcceptWorkerRequest,
) -> Result<AcceptWorkerResponse, ApiError> {
    let posting = store
        .get_posting(request.posting_id)
        .map_err(translate_persistence_error)?;
    let worker = store
        .get_worker(request.worker_id)
        .map_err(translate_persistence_error)?;

    let open_slot = match posting.open_slots.first() {
        Some(slot_id) => Some(
            store
                .get_slot(*slot_id)
                .map_err(translate_persistence_error)?,
        ),
        None => None,
    };
    let placeholder = store
        .find_applied_slot(posting.id, worker.id)
        .map_err(translate_persistence_error)?;

    let outcome = shiftflow_core::accept_worker(&posting, &worker, open_slot.as_ref(), placeholder.as_ref())
        .map_err(translate_core_error)?;

    match outcome {
        AcceptOutcome::Assigned {
            posting: updated_posting,
            slot,
            worker: mut updated_worker,
            removed_placeholder,
        } => {
            store.update_slot(&slot).map_err(translate_persistence_error)?;
            store
                .update_posting(&updated_posting)
                .map_err(translate_persistence_error)?;
            if let Some(placeholder_id) = removed_placeholder {
                store
                    .delete_slot(placeholder_id)
                    .map_err(translate_persistence_error)?;
            }

            // Cancel same-day applications that conflict with the
            // accepted window.
            let candidates = store
                .list_applied_slots_for_worker_on(updated_worker.id, slot.window.date)
                .map_err(translate_persistence_error)?;
            let resolution =
                shiftflow_core::resolve_conflicts(&slot, candidates).map_err(translate_core_error)?;
            for cancelled in &resolution.cancelled {
                store
                    .update_slot(cancelled)
                    .map_err(translate_persistence_error)?;
                let mut other = store
                    .get_posting(cancelled.posting)
                    .map_err(translate_persistence_error)?;
                other.clear_membership(updated_worker.id);
                store
                    .update_posting(&other)
                    .map_err(translate_persistence_error)?;
                updated_worker.applications.retain(|p| *p != cancelled.posting);
            }

            store
                .update_worker(&updated_worker)
                .map_err(translate_persistence_error)?;

            if let Some(handle) = renderer.render(
                DocumentKind::Contract,
                &format!("slot {} worker {}", slot.id, updated_worker.id),
            ) {
                info!(
                    slot_id = slot.id,
                    reference = handle.reference,
                    "Rendered work agreement"
                );
            }
            notify_quietly(
                notifier,
                &updated_worker.email,
                NoticeKind::ApplicationAccepted,
                &updated_posting.title,
            );

            Ok(AcceptWorkerResponse {
                posting_id: updated_posting.id,
                worker_id: updated_worker.id,
                membership: String::from("accepted"),
                slot_id: slot.id,
                cancelled_conflicts: resolution.cancelled.iter().map(|s| s.id).collect(),
                message: String::from("Worker assigned to shift"),
            })
        }
        AcceptOutcome::Reserved {
            posting: updated_posting,
            reserve,
            worker: mut updated_worker,
            removed_placeholder,
        } => {
            let saved = store
                .create_slot(&reserve)
                .map_err(translate_persistence_error)?;
            updated_worker.shifts.push(saved.id);

            if let Some(placeholder_id) = removed_placeholder {
                store
                    .delete_slot(placeholder_id)
                    .map_err(translate_persistence_error)?;
            }
            store
                .update_posting(&updated_posting)
                .map_err(translate_persistence_error)?;
            store
                .update_worker(&updated_worker)
                .map_err(translate_persistence_error)?;

            notify_quietly(
                notifier,
                &updated_worker.email,
                NoticeKind::PlacedOnReserve,
                &updated_posting.title,
            );

            Ok(AcceptWorkerResponse {
                posting_id: updated_posting.id,
                worker_id: updated_worker.id,
                membership: String::from("reserve"),
                slot_id: saved.id,
                cancelled_conflicts: Vec::new(),
                message: String::from("Posting full; worker placed on reserve"),
            })
        }
    }
}

/// Rejects a pending applicant.
///
/// # Errors
///
/// Returns an error if the posting or worker does not exist, the
/// worker has no pending application, or the store fails.
pub fn reject_worker(
    store: &mut Persistence,
    notifier: &dyn Notifier,
    request: RejectWorkerRequest,
) -> Result<RejectWorkerResponse, ApiError> {
    let posting = store
        .get_posting(request.posting_id)
        .map_err(translate_persistence_error)?;
    let worker = store
        .get_worker(request.worker_id)
        .map_err(translate_persistence_error)?;
    let placeholder = store
        .find_applied_slot(posting.id, worker.id)
        .map_err(translate_persistence_error)?;

    let outcome =
        shiftflow_core::reject_worker(&posting, &worker, placeholder.as_ref()).map_err(translate_core_error)?;

    if let Some(rejected) = &outcome.rejected_placeholder {
        store
            .update_slot(rejected)
            .map_err(translate_persistence_error)?;
    }
    store
        .update_posting(&outcome.posting)
        .map_err(translate_persistence_error)?;
    store
        .update_worker(&outcome.worker)
        .map_err(translate_persistence_error)?;

    notify_quietly(
        notifier,
        &outcome.worker.email,
        NoticeKind::ApplicationRejected,
        &outcome.posting.title,
    );

    Ok(RejectWorkerResponse {
        posting_id: outcome.posting.id,
        worker_id: outcome.worker.id,
        message: String::from("Application rejected"),
    })
}

/// Withdraws a worker's pending application.
///
/// Withdrawing without a pending application is a structured no-op.
///
/// # Errors
///
/// Returns an error if the posting or worker does not exist, or the
/// store fails.
pub fn withdraw_application(
    store: &mut Persistence,
    request: WithdrawApplicationRequest,
) -> Result<WithdrawApplicationResponse, ApiError> {
    let posting = store
        .get_posting(request.posting_id)
        .map_err(translate_persistence_error)?;
    let worker = store
        .get_worker(request.worker_id)
        .map_err(translate_persistence_error)?;
    let placeholder = store
        .find_applied_slot(posting.id, worker.id)
        .map_err(translate_persistence_error)?;

    match shiftflow_core::withdraw_application(&posting, &worker, placeholder.as_ref()) {
        WithdrawOutcome::NotApplied => Ok(WithdrawApplicationResponse {
            posting_id: posting.id,
            worker_id: worker.id,
            withdrawn: false,
            message: String::from("No pending application to withdraw"),
        }),
        WithdrawOutcome::Withdrawn {
            posting: updated_posting,
            worker: updated_worker,
            deleted_placeholder,
        } => {
            if let Some(placeholder_id) = deleted_placeholder {
                store
                    .delete_slot(placeholder_id)
                    .map_err(translate_persistence_error)?;
            }
            store
                .update_posting(&updated_posting)
                .map_err(translate_persistence_error)?;
            store
                .update_worker(&updated_worker)
                .map_err(translate_persistence_error)?;

            Ok(WithdrawApplicationResponse {
                posting_id: updated_posting.id,
                worker_id: updated_worker.id,
                withdrawn: true,
                message: String::from("Application withdrawn"),
            })
        }
    }
}

/// Cancels a worker's assigned slot.
///
/// Strictly more than 24 hours before the start the slot is cancelled;
/// at or inside the boundary it settles with a defaulted four-hour
/// checkout so the late cancellation is billed as worked.
///
/// # Errors
///
/// Returns an error if the slot does not exist, has no assigned
/// worker, or the store fails.
pub fn worker_cancel(
    store: &mut Persistence,
    clock: &dyn Clock,
    notifier: &dyn Notifier,
    request: WorkerCancelRequest,
) -> Result<WorkerCancelResponse, ApiError> {
    let slot = store
        .get_slot(request.slot_id)
        .map_err(translate_persistence_error)?;
    let worker_id = slot.assigned_worker().map_err(translate_domain_error)?;

    let outcome = shiftflow_core::worker_cancel(&slot, clock.now()).map_err(translate_core_error)?;
    let (updated, billed) = match outcome {
        CancelOutcome::Cancelled { slot } => (slot, false),
        CancelOutcome::BilledAsWorked { slot } => (slot, true),
    };

    store
        .update_slot(&updated)
        .map_err(translate_persistence_error)?;

    let mut posting = store
        .get_posting(updated.posting)
        .map_err(translate_persistence_error)?;
    posting.clear_membership(worker_id);
    store
        .update_posting(&posting)
        .map_err(translate_persistence_error)?;

    let employer = store
        .get_employer(updated.employer)
        .map_err(translate_persistence_error)?;
    notify_quietly(
        notifier,
        &employer.email,
        NoticeKind::ShiftCancelled,
        updated.worker_name.as_deref().unwrap_or(""),
    );

    info!(slot_id = updated.id, billed = billed, "Worker cancelled shift");

    Ok(WorkerCancelResponse {
        slot_id: updated.id,
        status: updated.status.as_str().to_string(),
        billed,
        message: if billed {
            String::from("Cancelled inside 24 hours; slot billed as worked")
        } else {
            String::from("Shift cancelled")
        },
    })
}

/// Releases the assigned worker from a slot, promoting the first
/// reserve when one exists.
///
/// More than 72 hours before the start the slot reopens; inside the
/// boundary it is recorded as replaced.
///
/// # Errors
///
/// Returns an error if the slot does not exist, is not assigned, or
/// the store fails.
pub fn employer_replace(
    store: &mut Persistence,
    clock: &dyn Clock,
    notifier: &dyn Notifier,
    request: EmployerReplaceRequest,
) -> Result<EmployerReplaceResponse, ApiError> {
    let slot = store
        .get_slot(request.slot_id)
        .map_err(translate_persistence_error)?;
    let posting = store
        .get_posting(slot.posting)
        .map_err(translate_persistence_error)?;

    let reserve_pair = match store
        .find_first_reserve_slot(posting.id)
        .map_err(translate_persistence_error)?
    {
        Some(reserve_slot) => {
            let reserve_worker_id = reserve_slot
                .assigned_worker()
                .map_err(translate_domain_error)?;
            let reserve_worker = store
                .get_worker(reserve_worker_id)
                .map_err(translate_persistence_error)?;
            Some((reserve_slot, reserve_worker))
        }
        None => None,
    };

    let outcome = shiftflow_core::employer_release(
        &slot,
        &posting,
        reserve_pair.as_ref().map(|(s, w)| (s, w)),
        clock.now(),
    )
    .map_err(translate_core_error)?;

    store
        .update_slot(&outcome.slot)
        .map_err(translate_persistence_error)?;
    store
        .update_posting(&outcome.posting)
        .map_err(translate_persistence_error)?;

    let mut released = store
        .get_worker(outcome.released_worker)
        .map_err(translate_persistence_error)?;
    released.shifts.retain(|s| *s != slot.id);
    store
        .update_worker(&released)
        .map_err(translate_persistence_error)?;
    notify_quietly(
        notifier,
        &released.email,
        NoticeKind::WorkerReleased,
        &outcome.posting.title,
    );

    let promoted_worker_id = match &outcome.promotion {
        Some(promotion) => {
            store
                .delete_slot(promotion.deleted_reserve)
                .map_err(translate_persistence_error)?;
            store
                .update_worker(&promotion.worker)
                .map_err(translate_persistence_error)?;
            notify_quietly(
                notifier,
                &promotion.worker.email,
                NoticeKind::ReservePromoted,
                &outcome.posting.title,
            );
            Some(promotion.worker.id)
        }
        None => None,
    };

    let reopened = outcome.slot.status == SlotStatus::Open;

    info!(
        slot_id = slot.id,
        promoted = promoted_worker_id.is_some(),
        reopened = reopened,
        "Released worker from shift"
    );

    Ok(EmployerReplaceResponse {
        slot_id: slot.id,
        status: outcome.slot.status.as_str().to_string(),
        promoted_worker_id,
        reopened,
        message: String::from("Worker released"),
    })
}

/// Submits a worker's checkout for employer review.
///
/// When the report rates the employer, the employer's average is
/// recomputed over every checkout rating they have ever received.
///
/// # Errors
///
/// Returns an error if the slot does not exist, the reported span or
/// rating is invalid, the slot is not awaiting its checkout, or the
/// store fails.
pub fn submit_checkout(
    store: &mut Persistence,
    notifier: &dyn Notifier,
    request: SubmitCheckoutRequest,
) -> Result<SubmitCheckoutResponse, ApiError> {
    let slot = store
        .get_slot(request.slot_id)
        .map_err(translate_persistence_error)?;
    let employer = store
        .get_employer(slot.employer)
        .map_err(translate_persistence_error)?;

    let start = parse_time(&request.start_time).map_err(translate_domain_error)?;
    let end = parse_time(&request.end_time).map_err(translate_domain_error)?;

    // On a resubmission the slot's previous rating is replaced, so it
    // is excluded from the history before the new one is appended.
    let employer_ratings: Vec<f64> = if let Some(rating) = request.rating {
        let mut ratings: Vec<f64> = store
            .list_slots_for_employer(employer.id)
            .map_err(translate_persistence_error)?
            .iter()
            .filter(|s| s.id != slot.id)
            .filter_map(|s| s.checkout.as_ref().and_then(|c| c.rating))
            .collect();
        ratings.push(rating);
        ratings
    } else {
        Vec::new()
    };

    let report = CheckoutReport {
        start,
        end,
        break_minutes: request.break_minutes,
        rating: request.rating,
        feedback: request.feedback,
    };

    let outcome =
        shiftflow_core::submit_checkout(&slot, &employer, report, &employer_ratings).map_err(translate_core_error)?;

    store
        .update_slot(&outcome.slot)
        .map_err(translate_persistence_error)?;
    if let Some(updated_employer) = &outcome.employer {
        store
            .update_employer(updated_employer)
            .map_err(translate_persistence_error)?;
    }

    notify_quietly(
        notifier,
        &employer.email,
        NoticeKind::CheckoutSubmitted,
        outcome.slot.worker_name.as_deref().unwrap_or(""),
    );

    Ok(SubmitCheckoutResponse {
        slot_id: outcome.slot.id,
        status: outcome.slot.status.as_str().to_string(),
        employer_rating: outcome.employer.map(|e| e.rating),
        message: String::from("Checkout submitted for review"),
    })
}

/// Accepts a submitted checkout, rating the worker.
///
/// # Errors
///
/// Returns an error if the slot does not exist, the rating is invalid,
/// the checkout is not under review, or the store fails.
pub fn accept_checkout(
    store: &mut Persistence,
    notifier: &dyn Notifier,
    request: AcceptCheckoutRequest,
) -> Result<AcceptCheckoutResponse, ApiError> {
    let slot = store
        .get_slot(request.slot_id)
        .map_err(translate_persistence_error)?;
    let worker_id = slot.assigned_worker().map_err(translate_domain_error)?;
    let worker = store
        .get_worker(worker_id)
        .map_err(translate_persistence_error)?;

    let outcome = shiftflow_core::accept_checkout(&slot, &worker, request.rating, request.late, request.remark)
        .map_err(translate_core_error)?;

    store
        .update_slot(&outcome.slot)
        .map_err(translate_persistence_error)?;
    store
        .update_worker(&outcome.worker)
        .map_err(translate_persistence_error)?;

    notify_quietly(
        notifier,
        &outcome.worker.email,
        NoticeKind::CheckoutAccepted,
        &outcome.slot.title,
    );

    Ok(AcceptCheckoutResponse {
        slot_id: outcome.slot.id,
        status: outcome.slot.status.as_str().to_string(),
        worker_rating: outcome.worker.rating,
        message: String::from("Checkout accepted"),
    })
}

/// Rejects a submitted checkout with a remark so the worker can
/// correct and resubmit.
///
/// # Errors
///
/// Returns an error if the slot does not exist, the checkout is not
/// under review, or the store fails.
pub fn reject_checkout(
    store: &mut Persistence,
    notifier: &dyn Notifier,
    request: RejectCheckoutRequest,
) -> Result<RejectCheckoutResponse, ApiError> {
    let slot = store
        .get_slot(request.slot_id)
        .map_err(translate_persistence_error)?;
    let worker_id = slot.assigned_worker().map_err(translate_domain_error)?;
    let worker = store
        .get_worker(worker_id)
        .map_err(translate_persistence_error)?;

    let outcome = shiftflow_core::reject_checkout(&slot, &worker, request.remark, request.late)
        .map_err(translate_core_error)?;

    store
        .update_slot(&outcome.slot)
        .map_err(translate_persistence_error)?;
    if let Some(updated_worker) = &outcome.worker {
        store
            .update_worker(updated_worker)
            .map_err(translate_persistence_error)?;
    }

    notify_quietly(
        notifier,
        &worker.email,
        NoticeKind::CheckoutRejected,
        &outcome.slot.title,
    );

    Ok(RejectCheckoutResponse {
        slot_id: outcome.slot.id,
        status: outcome.slot.status.as_str().to_string(),
        message: String::from("Checkout rejected; worker may resubmit"),
    })
}

/// Marks an awaited checkout as a no-show and decays the worker's
/// attendance score.
///
/// # Errors
///
/// Returns an error if the slot does not exist, is not awaiting its
/// checkout, or the store fails.
pub fn mark_no_show(
    store: &mut Persistence,
    notifier: &dyn Notifier,
    request: MarkNoShowRequest,
) -> Result<MarkNoShowResponse, ApiError> {
    let slot = store
        .get_slot(request.slot_id)
        .map_err(translate_persistence_error)?;
    let worker_id = slot.assigned_worker().map_err(translate_domain_error)?;
    let worker = store
        .get_worker(worker_id)
        .map_err(translate_persistence_error)?;

    let outcome = shiftflow_core::mark_no_show(&slot, &worker).map_err(translate_core_error)?;

    store
        .update_slot(&outcome.slot)
        .map_err(translate_persistence_error)?;
    store
        .update_worker(&outcome.worker)
        .map_err(translate_persistence_error)?;

    notify_quietly(
        notifier,
        &outcome.worker.email,
        NoticeKind::NoShowRecorded,
        &outcome.slot.title,
    );

    Ok(MarkNoShowResponse {
        slot_id: outcome.slot.id,
        status: outcome.slot.status.as_str().to_string(),
        attendance: outcome.worker.attendance,
        message: String::from("No-show recorded"),
    })
}
