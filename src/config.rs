use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Seconds between polls of the container list.
    pub poll_interval_secs: u64,
    /// Include stopped containers in every listing.
    pub list_all: bool,
    /// Ask the runtime to compute `size_rw`/`size_root_fs` and include
    /// them in change detection. Off by default: size computation is
    /// expensive and the fields are absent unless requested.
    pub collect_sizes: bool,
    /// Backlog of each output channel before the tick loop blocks.
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_secs: 1,
            list_all: false,
            collect_sizes: false,
            channel_capacity: 16,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("dockwatch.toml"))
            .merge(Json::file("dockwatch.json"))
            .merge(Env::prefixed("DOCKWATCH_"))
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

        if config.poll_interval_secs == 0 {
            return Err(anyhow::anyhow!("poll_interval_secs must be at least 1"));
        }
        if config.channel_capacity == 0 {
            return Err(anyhow::anyhow!("channel_capacity must be at least 1"));
        }

        Ok(config)
    }
}
