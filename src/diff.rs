//! Set reconciliation between two container snapshots.
//!
//! Containers are matched across snapshots by id alone. Each member of the
//! new snapshot becomes a `CREATE` (no previous match) or an `UPDATE`
//! (matched but not equivalent), then each unmatched member of the previous
//! snapshot becomes a `DELETE`. That emission order — next-snapshot events
//! first, deletes last — is part of the contract; consumers may rely on it
//! within one batch.

use std::collections::HashMap;

use bollard::models::ContainerSummary;

use crate::compare::Comparator;
use crate::error::Error;
use crate::event::{Event, Snapshot};

/// Classifies every container in `previous` and `next` into change events.
///
/// Returns an error without emitting anything when either snapshot is
/// malformed (duplicate or missing ids); a partial event batch is never
/// produced.
pub fn diff(
    comparator: &Comparator,
    previous: &Snapshot,
    next: &Snapshot,
) -> Result<Vec<Event>, Error> {
    if previous.is_empty() && next.is_empty() {
        return Ok(Vec::new());
    }

    let prev_index = index_by_id(previous)?;
    let next_index = index_by_id(next)?;

    let mut events = Vec::new();
    for record in next {
        let id = record.id.as_deref().ok_or(Error::MissingId)?;
        match prev_index.get(id) {
            None => events.push(Event::created(record.clone())),
            Some(prior) if !comparator.equivalent(record, prior) => {
                events.push(Event::updated(record.clone(), (*prior).clone()));
            }
            Some(_) => {}
        }
    }
    for record in previous {
        let id = record.id.as_deref().ok_or(Error::MissingId)?;
        if !next_index.contains_key(id) {
            events.push(Event::deleted(record.clone()));
        }
    }

    Ok(events)
}

/// Builds the id lookup for one snapshot, rejecting malformed listings
/// up front so no events are emitted from them.
fn index_by_id(snapshot: &Snapshot) -> Result<HashMap<&str, &ContainerSummary>, Error> {
    let mut index = HashMap::with_capacity(snapshot.len());
    for record in snapshot {
        let id = record.id.as_deref().ok_or(Error::MissingId)?;
        if index.insert(id, record).is_some() {
            return Err(Error::DuplicateId(id.to_owned()));
        }
    }
    Ok(index)
}
