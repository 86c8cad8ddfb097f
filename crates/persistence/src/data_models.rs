// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document encoding and indexed-column extraction.
//!
//! Entities are stored as JSON documents in a `doc` column. The columns
//! the queries filter on are duplicated out of the document at write
//! time; this module keeps that duplication in one place.

use serde::Serialize;
use serde::de::DeserializeOwned;
use time::Date;

use crate::error::PersistenceError;
use shiftflow_domain::{ShiftPosting, ShiftSlot, format_date};

/// Serializes an entity into its stored JSON document.
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(value)?)
}

/// Deserializes an entity from its stored JSON document.
pub(crate) fn decode<T: DeserializeOwned>(doc: &str) -> Result<T, PersistenceError> {
    Ok(serde_json::from_str(doc)?)
}

/// Formats a date the way the indexed `start_date` column stores it.
pub(crate) fn date_key(date: Date) -> Result<String, PersistenceError> {
    format_date(date).map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Indexed columns duplicated from a slot document.
pub(crate) struct SlotIndex {
    pub posting_id: i64,
    pub employer_id: i64,
    pub worker_id: Option<i64>,
    pub status: String,
    pub start_at_unix: i64,
    pub start_date: String,
}

pub(crate) fn slot_index(slot: &ShiftSlot) -> Result<SlotIndex, PersistenceError> {
    Ok(SlotIndex {
        posting_id: slot.posting,
        employer_id: slot.employer,
        worker_id: slot.worker,
        status: slot.status.as_str().to_string(),
        start_at_unix: slot.window.start_at().assume_utc().unix_timestamp(),
        start_date: date_key(slot.window.date)?,
    })
}

/// Indexed columns duplicated from a posting document.
pub(crate) struct PostingIndex {
    pub employer_id: i64,
    pub status: String,
    pub start_at_unix: i64,
}

pub(crate) fn posting_index(posting: &ShiftPosting) -> PostingIndex {
    PostingIndex {
        employer_id: posting.employer,
        status: posting.status.as_str().to_string(),
        start_at_unix: posting.window.start_at().assume_utc().unix_timestamp(),
    }
}
