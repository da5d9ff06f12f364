//! Error taxonomy for the watch loop.
//!
//! Two families: a failed listing call (transient, the tick is skipped and
//! the baseline keeps its last good value) and malformed listings from the
//! runtime (duplicate or missing ids), which abort the diff before any
//! event is produced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The container listing call failed at the transport or API level.
    #[error("container listing failed: {0}")]
    Fetch(#[from] bollard::errors::Error),

    /// One listing carried the same container id twice. Ids are the sole
    /// matching key across snapshots, so this input cannot be diffed.
    #[error("duplicate container id `{0}` in one listing")]
    DuplicateId(String),

    /// A listed container carried no id at all.
    #[error("container record without an id")]
    MissingId,
}
