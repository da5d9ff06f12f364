//! Dockwatch: a polling changefeed over a Docker-compatible runtime.
//!
//! Instead of subscribing to the runtime's native event bus, dockwatch
//! lists all containers on a fixed cadence and diffs successive snapshots,
//! emitting `CREATE`/`UPDATE`/`DELETE` events for membership and
//! field-level changes. Polling trades latency for robustness: a missed
//! native event can never desynchronise the feed, because every tick
//! re-derives the full picture from scratch.
//!
//! The crate is built around three pieces: the [`compare::Comparator`]
//! (content equality with explicit per-field ordering policy), the
//! [`diff`] reconciliation pass, and the [`watcher::Watcher`] loop that
//! owns the retained baseline and the output channels. The runtime is
//! reached through the [`runtime::ContainerRuntime`] trait, implemented
//! for Docker via [bollard](https://docs.rs/bollard).

pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod event;
pub mod runtime;
pub mod watcher;

pub use compare::Comparator;
pub use config::Config;
pub use error::Error;
pub use event::{Event, EventType, Snapshot};
pub use watcher::Watcher;
