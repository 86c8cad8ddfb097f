// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Same-day scheduling conflict resolution.
//!
//! When a worker is accepted for a shift, their other pending
//! applications on the same day are checked against the accepted
//! window: anything overlapping it, or starting less than an hour
//! after it ends, is cancelled. The pruning is silent; no
//! notifications are requested.

use crate::error::CoreError;
use shiftflow_domain::{ShiftSlot, SlotStatus};

/// Result of pruning a worker's conflicting applications.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictResolution {
    /// Placeholder slots cancelled because they conflict with the
    /// accepted window. The caller removes the matching applications
    /// from their postings and the worker's lists.
    pub cancelled: Vec<ShiftSlot>,
    /// Candidate slots that do not conflict and stay untouched.
    pub kept: Vec<ShiftSlot>,
}

/// Prunes pending applications that conflict with an accepted slot.
///
/// `candidates` are the worker's other `Applied` placeholder slots on
/// the same date. Non-`Applied` slots are ignored and returned as kept.
///
/// # Errors
///
/// Returns an error if a conflicting placeholder cannot transition to
/// `Cancelled`.
pub fn resolve_conflicts(
    accepted: &ShiftSlot,
    candidates: Vec<ShiftSlot>,
) -> Result<ConflictResolution, CoreError> {
    let mut cancelled = Vec::new();
    let mut kept = Vec::new();

    for candidate in candidates {
        if candidate.id == accepted.id || candidate.status != SlotStatus::Applied {
            kept.push(candidate);
            continue;
        }

        if candidate.window.conflicts_with(&accepted.window) {
            let mut pruned = candidate;
            pruned.transition_to(SlotStatus::Cancelled)?;
            cancelled.push(pruned);
        } else {
            kept.push(candidate);
        }
    }

    Ok(ConflictResolution { cancelled, kept })
}
