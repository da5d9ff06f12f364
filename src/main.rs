//! Dockwatch daemon entry point.
//!
//! Thin host around the watch loop: load config, connect to Docker,
//! spawn the watcher, print whatever arrives on the two streams.

use log::{debug, error, info};
use tokio::signal;

use dockwatch::runtime::DockerRuntime;
use dockwatch::{Config, Event, EventType, Watcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    // Load configuration
    let cfg = Config::load()?;
    info!("Starting dockwatch daemon with config: {:?}", cfg);

    // Container Runtime (Docker)
    let runtime = DockerRuntime::connect(&cfg)?;
    let mut watcher = Watcher::spawn(runtime, &cfg);

    loop {
        tokio::select! {
            event = watcher.events.recv() => match event {
                Some(event) => report(&event),
                None => {
                    error!("Event stream closed unexpectedly");
                    break;
                }
            },
            err = watcher.errors.recv() => match err {
                Some(err) => error!("Watch error: {}", err),
                None => {
                    error!("Error stream closed unexpectedly");
                    break;
                }
            },
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    info!("Shutdown complete.");
    Ok(())
}

fn report(event: &Event) {
    let names = event.container.names.as_deref().unwrap_or_default();
    let id = event.container.id.as_deref().unwrap_or("<no id>");
    info!("{}: {:?} ({})", event.kind, names, id);

    if event.kind == EventType::Update {
        match (
            serde_json::to_string(&event.original),
            serde_json::to_string(&event.container),
        ) {
            (Ok(old), Ok(new)) => debug!("{} old={} new={}", id, old, new),
            (Err(e), _) | (_, Err(e)) => error!("Failed to serialize event detail: {}", e),
        }
    } else if let Ok(payload) = serde_json::to_string(&event.container) {
        debug!("{} {}", id, payload);
    }
}
