// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Party and billing entity types.
//!
//! All identifiers are store-assigned row ids. Entities reference each
//! other by id lists only; a freshly constructed entity carries id `0`
//! until the store assigns the real one on insert.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identifier for a worker.
pub type WorkerId = i64;
/// Identifier for an employer.
pub type EmployerId = i64;
/// Identifier for a shift posting.
pub type PostingId = i64;
/// Identifier for a shift slot.
pub type SlotId = i64;
/// Identifier for a flexpool.
pub type FlexPoolId = i64;
/// Identifier for an invoice.
pub type InvoiceId = i64;

/// A worker who applies for and works shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub email: String,
    /// Flexpools this worker belongs to.
    pub flexpools: Vec<FlexPoolId>,
    /// Slots this worker currently holds, in any non-deleted status.
    pub shifts: Vec<SlotId>,
    /// Postings this worker has an outstanding application on.
    pub applications: Vec<PostingId>,
    /// Invoices issued to this worker.
    pub invoices: Vec<InvoiceId>,
    /// Running rating average, 0 to 5.
    pub rating: f64,
    /// Number of ratings folded into the average.
    pub rating_count: u32,
    /// Punctuality score, 0 to 100.
    pub punctuality: f64,
    /// Attendance score, 0 to 100.
    pub attendance: f64,
}

impl Worker {
    /// Creates an unsaved worker with default scores.
    ///
    /// New workers start at a 5.0 rating with full punctuality and
    /// attendance; scores only move once checkouts are processed.
    #[must_use]
    pub const fn new(name: String, email: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            flexpools: Vec::new(),
            shifts: Vec::new(),
            applications: Vec::new(),
            invoices: Vec::new(),
            rating: 5.0,
            rating_count: 0,
            punctuality: 100.0,
            attendance: 100.0,
        }
    }
}

/// An employer who publishes shift postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employer {
    pub id: EmployerId,
    pub name: String,
    pub email: String,
    /// Postings published by this employer.
    pub postings: Vec<PostingId>,
    /// Flexpools owned by this employer.
    pub flexpools: Vec<FlexPoolId>,
    /// Invoices issued to this employer.
    pub invoices: Vec<InvoiceId>,
    /// Rating average computed from worker checkout ratings, 0 to 5.
    pub rating: f64,
    /// Number of checkout ratings behind the average.
    pub rating_count: u32,
}

impl Employer {
    /// Creates an unsaved employer with default scores.
    #[must_use]
    pub const fn new(name: String, email: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            postings: Vec::new(),
            flexpools: Vec::new(),
            invoices: Vec::new(),
            rating: 5.0,
            rating_count: 0,
        }
    }
}

/// A named pool of preferred workers owned by one employer.
///
/// Workers in a pool attached to a posting skip the application queue
/// and are assigned directly when they apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexPool {
    pub id: FlexPoolId,
    pub employer: EmployerId,
    pub title: String,
    /// Workers in the pool.
    pub workers: Vec<WorkerId>,
    /// Postings the pool is attached to.
    pub postings: Vec<PostingId>,
}

impl FlexPool {
    /// Creates an unsaved flexpool.
    #[must_use]
    pub const fn new(employer: EmployerId, title: String) -> Self {
        Self {
            id: 0,
            employer,
            title,
            workers: Vec::new(),
            postings: Vec::new(),
        }
    }
}

/// The party an invoice is issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum InvoiceParty {
    /// Invoice payable to a worker.
    Worker(WorkerId),
    /// Invoice payable by an employer.
    Employer(EmployerId),
}

impl InvoiceParty {
    /// Returns the string tag used in indexed storage columns.
    #[must_use]
    pub const fn kind_str(&self) -> &'static str {
        match self {
            Self::Worker(_) => "worker",
            Self::Employer(_) => "employer",
        }
    }

    /// Returns the referenced party id.
    #[must_use]
    pub const fn party_id(&self) -> i64 {
        match self {
            Self::Worker(id) | Self::Employer(id) => *id,
        }
    }
}

/// An aggregated weekly invoice. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub party: InvoiceParty,
    /// Slots consumed by this invoice.
    pub slots: Vec<SlotId>,
    /// ISO week number the invoice is tagged with.
    pub week: u8,
    /// Calendar year of the ISO week.
    pub year: i32,
    /// When the invoice was generated.
    pub issued_at: OffsetDateTime,
    /// Total amount including VAT, rounded to cents.
    pub total: Decimal,
}
