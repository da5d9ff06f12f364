//! The polling loop that turns successive listings into change events.
//!
//! One background task owns the baseline snapshot. Each tick it fetches a
//! fresh listing, diffs it against the baseline, publishes the resulting
//! events, then replaces the baseline with the fresh listing — also when
//! the diff was empty, so a quiet tick still advances the comparison
//! point. A failed fetch (or a malformed listing) surfaces one error and
//! leaves the baseline at its last good value, so a transient fault never
//! turns into a spurious create/delete storm on the next tick.
//!
//! Overdue ticks are skipped: a fetch that outlasts the interval collapses
//! the missed boundaries into the next one, keeping at most one
//! reconciliation in flight.

use std::time::Duration;

use log::trace;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::compare::Comparator;
use crate::config::Config;
use crate::diff::diff;
use crate::error::Error;
use crate::event::{Event, Snapshot};
use crate::runtime::ContainerRuntime;

/// Handle to a spawned watch loop.
///
/// Events and errors arrive on the two receivers in the order they were
/// produced; a full batch is delivered before the next fetch begins.
/// Dropping the watcher stops the loop.
pub struct Watcher {
    pub events: mpsc::Receiver<Event>,
    pub errors: mpsc::Receiver<Error>,
    handle: JoinHandle<()>,
}

impl Watcher {
    /// Spawns the tick loop against the given runtime.
    ///
    /// The first tick fires immediately and diffs against an empty
    /// baseline, so every container already running at startup is
    /// reported as a `CREATE`.
    pub fn spawn<R>(runtime: R, config: &Config) -> Self
    where
        R: ContainerRuntime + Send + Sync + 'static,
    {
        let (events_tx, events) = mpsc::channel(config.channel_capacity);
        let (errors_tx, errors) = mpsc::channel(config.channel_capacity);
        let comparator = Comparator::new(config.collect_sizes);
        let period = Duration::from_secs(config.poll_interval_secs);
        let handle = tokio::spawn(run(runtime, comparator, period, events_tx, errors_tx));
        Self {
            events,
            errors,
            handle,
        }
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run<R>(
    runtime: R,
    comparator: Comparator,
    period: Duration,
    events: mpsc::Sender<Event>,
    errors: mpsc::Sender<Error>,
) where
    R: ContainerRuntime + Send + Sync,
{
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // The one piece of retained state. Replaced wholesale after every
    // successful diff, never mutated in place.
    let mut baseline = Snapshot::new();

    loop {
        ticker.tick().await;

        let next = match runtime.list_containers().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                // Baseline untouched; the next good listing diffs
                // against the last good one.
                if errors.send(err).await.is_err() {
                    return;
                }
                continue;
            }
        };

        let batch = match diff(&comparator, &baseline, &next) {
            Ok(batch) => batch,
            Err(err) => {
                if errors.send(err).await.is_err() {
                    return;
                }
                continue;
            }
        };

        trace!(
            "Tick reconciled {} containers into {} events",
            next.len(),
            batch.len()
        );
        for event in batch {
            // A slow consumer blocks here and delays the next tick; a
            // gone consumer ends the loop.
            if events.send(event).await.is_err() {
                return;
            }
        }

        baseline = next;
    }
}
