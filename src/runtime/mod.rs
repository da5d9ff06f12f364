use async_trait::async_trait;

use crate::error::Error;
use crate::event::Snapshot;

pub mod docker;
pub use docker::DockerRuntime;

#[async_trait]
pub trait ContainerRuntime {
    /// Fetch one point-in-time listing of the containers the runtime
    /// currently knows about.
    async fn list_containers(&self) -> Result<Snapshot, Error>;
}
