// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification and document rendering collaborators.
//!
//! Handlers request notices and documents through these traits; the
//! engine never talks to a mail service or a PDF pipeline directly. A
//! failed notification is logged and dropped — it must never block or
//! roll back a state transition that already happened.

use tracing::{info, warn};

/// The kind of notice a handler requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A new party registered.
    Welcome,
    /// A worker applied to a posting; sent to the employer.
    ApplicationReceived,
    /// An application was accepted; sent to the worker.
    ApplicationAccepted,
    /// An application was rejected; sent to the worker.
    ApplicationRejected,
    /// The posting was full; the worker was placed on reserve.
    PlacedOnReserve,
    /// A reserve worker was moved into a vacated slot.
    ReservePromoted,
    /// A worker cancelled their assigned shift; sent to the employer.
    ShiftCancelled,
    /// The employer released the worker from their shift.
    WorkerReleased,
    /// The shift has started; the worker should report their hours.
    CheckoutRequested,
    /// A checkout was submitted; sent to the employer.
    CheckoutSubmitted,
    /// A checkout was accepted; sent to the worker.
    CheckoutAccepted,
    /// A checkout was rejected and should be corrected.
    CheckoutRejected,
    /// The worker was recorded as a no-show.
    NoShowRecorded,
    /// A weekly invoice was issued.
    InvoiceIssued,
}

impl NoticeKind {
    /// Returns the string tag used in logs and recorded notices.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::ApplicationReceived => "application_received",
            Self::ApplicationAccepted => "application_accepted",
            Self::ApplicationRejected => "application_rejected",
            Self::PlacedOnReserve => "placed_on_reserve",
            Self::ReservePromoted => "reserve_promoted",
            Self::ShiftCancelled => "shift_cancelled",
            Self::WorkerReleased => "worker_released",
            Self::CheckoutRequested => "checkout_requested",
            Self::CheckoutSubmitted => "checkout_submitted",
            Self::CheckoutAccepted => "checkout_accepted",
            Self::CheckoutRejected => "checkout_rejected",
            Self::NoShowRecorded => "no_show_recorded",
            Self::InvoiceIssued => "invoice_issued",
        }
    }
}

/// A notification delivery failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError {
    /// What went wrong.
    pub message: String,
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Notification failed: {}", self.message)
    }
}

impl std::error::Error for NotifyError {}

/// Delivers notices to parties.
pub trait Notifier {
    /// Sends one notice to the given address.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails. Callers log the failure and
    /// continue; a notice never blocks a transition.
    fn notify(&self, recipient: &str, kind: NoticeKind, context: &str) -> Result<(), NotifyError>;
}

/// Notifier that writes every notice to the log. The production
/// default until a mail integration is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, recipient: &str, kind: NoticeKind, context: &str) -> Result<(), NotifyError> {
        info!(
            recipient = recipient,
            kind = kind.as_str(),
            context = context,
            "Notice requested"
        );
        Ok(())
    }
}

/// Sends a notice, logging a warning when delivery fails.
pub(crate) fn notify_quietly(
    notifier: &dyn Notifier,
    recipient: &str,
    kind: NoticeKind,
    context: &str,
) {
    if let Err(e) = notifier.notify(recipient, kind, context) {
        warn!(
            recipient = recipient,
            kind = kind.as_str(),
            error = %e,
            "Dropping undeliverable notice"
        );
    }
}

/// The kind of document a handler requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Work agreement generated when a worker is assigned.
    Contract,
    /// Weekly invoice document.
    Invoice,
}

impl DocumentKind {
    /// Returns the string tag used in logs and handles.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Invoice => "invoice",
        }
    }
}

/// Reference to a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    /// What kind of document was rendered.
    pub kind: DocumentKind,
    /// Opaque reference to the stored artifact.
    pub reference: String,
}

/// Renders contract and invoice documents.
pub trait DocumentRenderer {
    /// Renders a document and returns a handle to it, or `None` when
    /// rendering is disabled.
    fn render(&self, kind: DocumentKind, context: &str) -> Option<DocumentHandle>;
}

/// Renderer that produces nothing. The default until a document
/// pipeline is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl DocumentRenderer for NullRenderer {
    fn render(&self, _kind: DocumentKind, _context: &str) -> Option<DocumentHandle> {
        None
    }
}
