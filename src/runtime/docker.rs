use async_trait::async_trait;
use bollard::container::ListContainersOptions;
use bollard::Docker;
use log::debug;

use super::ContainerRuntime;
use crate::config::Config;
use crate::error::Error;
use crate::event::Snapshot;

pub struct DockerRuntime {
    docker: Docker,
    options: ListContainersOptions<String>,
}

impl DockerRuntime {
    /// Connect to the local Docker daemon using default settings.
    /// This handles unix socket on Linux.
    ///
    /// When `collect_sizes` is set, every listing asks the daemon to
    /// compute `size_rw`/`size_root_fs`, which is noticeably more
    /// expensive server-side; the watcher only compares those fields
    /// under the same flag.
    pub fn connect(config: &Config) -> Result<Self, Error> {
        let docker = Docker::connect_with_local_defaults()?;
        let options = ListContainersOptions {
            all: config.list_all,
            size: config.collect_sizes,
            ..Default::default()
        };
        Ok(Self { docker, options })
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn list_containers(&self) -> Result<Snapshot, Error> {
        let containers = self
            .docker
            .list_containers(Some(self.options.clone()))
            .await?;
        debug!("Listed {} containers", containers.len());
        Ok(containers)
    }
}
