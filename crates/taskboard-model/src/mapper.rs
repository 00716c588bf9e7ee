//! Wire-to-internal record mapping
//!
//! The only construction path for [`Task`]: renames the backend's `_id`
//! to the internal identifier, parses both RFC 3339 timestamps and
//! defaults the revision counter to 0 when the wire record omits it.
//! A malformed timestamp fails the record; there is no silent default
//! for dates.

use crate::task::{Task, TaskId, WireTask};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Errors raised while normalizing wire records
#[derive(Debug, thiserror::Error)]
pub enum MapTaskError {
    /// A timestamp string did not parse as RFC 3339
    #[error("task {id}: invalid {field} timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// Identifier of the offending record
        id: String,
        /// Which timestamp field was malformed
        field: &'static str,
        /// The raw string as received
        value: String,
        /// Underlying parse failure
        source: chrono::ParseError,
    },

    /// Two records in one response carried the same identifier
    #[error("duplicate task identifier {id} in one response")]
    DuplicateId {
        /// The repeated identifier
        id: String,
    },
}

fn parse_timestamp(
    id: &str,
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, MapTaskError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| MapTaskError::InvalidTimestamp {
            id: id.to_owned(),
            field,
            value: value.to_owned(),
            source,
        })
}

/// Normalize one wire record into the internal representation.
///
/// Deterministic and side-effect-free.
pub fn map_task(wire: WireTask) -> Result<Task, MapTaskError> {
    let created_at = parse_timestamp(&wire.id, "createdAt", &wire.created_at)?;
    let updated_at = parse_timestamp(&wire.id, "updatedAt", &wire.updated_at)?;

    Ok(Task::assemble(
        TaskId::from(wire.id),
        wire.title,
        wire.description,
        wire.completed,
        wire.images,
        created_at,
        updated_at,
        wire.revision.unwrap_or(0),
    ))
}

/// Normalize a whole fetch result, enforcing identifier uniqueness.
///
/// The first malformed record aborts the mapping; callers surface the
/// failure as a fetch error.
pub fn map_tasks(wires: Vec<WireTask>) -> Result<Vec<Task>, MapTaskError> {
    let mut seen = HashSet::with_capacity(wires.len());
    let mut tasks = Vec::with_capacity(wires.len());
    for wire in wires {
        if !seen.insert(wire.id.clone()) {
            return Err(MapTaskError::DuplicateId { id: wire.id });
        }
        tasks.push(map_task(wire)?);
    }
    Ok(tasks)
}
