//! Change events emitted by the watch loop.
//!
//! A container's observable metadata is the [`ContainerSummary`] returned
//! by the runtime's list API; one poll yields a [`Snapshot`] of them.
//! Diffing two snapshots yields [`Event`]s, which are serialised with
//! [`serde`](https://serde.rs/) so hosts can forward them as JSON.

use bollard::models::ContainerSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One point-in-time listing of every observed container.
///
/// Sequence order carries no matching meaning (containers are matched by
/// id), but it does fix the order in which events are emitted.
pub type Snapshot = Vec<ContainerSummary>;

/// The kind of change observed for a single container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    /// The container appeared since the previous snapshot.
    Create,
    /// The container is still present but one of its tracked fields changed.
    Update,
    /// The container vanished since the previous snapshot.
    Delete,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventType::Create => "CREATE",
            EventType::Update => "UPDATE",
            EventType::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A single container change.
///
/// `container` is the current view: the new record for `Create` and
/// `Update`, the last known record for `Delete`. `original` holds the
/// prior view and is only populated for `Update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventType,
    pub container: ContainerSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<ContainerSummary>,
}

impl Event {
    pub fn created(container: ContainerSummary) -> Self {
        Self {
            kind: EventType::Create,
            container,
            original: None,
        }
    }

    pub fn updated(container: ContainerSummary, original: ContainerSummary) -> Self {
        Self {
            kind: EventType::Update,
            container,
            original: Some(original),
        }
    }

    pub fn deleted(container: ContainerSummary) -> Self {
        Self {
            kind: EventType::Delete,
            container,
            original: None,
        }
    }
}
