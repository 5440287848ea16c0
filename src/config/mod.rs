use crate::{
    request::{RetryPolicy, DEFAULT_RETRIES, DEFAULT_RETRY_DELAY},
    ENV_CONFIG_PATH, ENV_KINESIS_ENDPOINT_URL, ENV_RETRIES, ENV_RETRY_DELAY_MS,
};

use std::env;
use std::time::Duration;

mod file;

use file::ConfigFile;
pub use file::StreamConfig;

#[derive(Debug)]
pub struct Config {
    endpoint_url: Option<String>,
    retry: RetryPolicy,
    streams: Vec<StreamConfig>,
}

impl Config {
    pub fn new() -> Self {
        let endpoint_url = env::var(ENV_KINESIS_ENDPOINT_URL).ok();
        let retries = env::var(ENV_RETRIES)
            .ok()
            .and_then(|r| r.parse::<u32>().ok())
            .unwrap_or(DEFAULT_RETRIES);
        let delay = env::var(ENV_RETRY_DELAY_MS)
            .ok()
            .and_then(|d| d.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RETRY_DELAY);

        let conf_path = env::var(ENV_CONFIG_PATH).ok();
        let file = ConfigFile::new(conf_path);

        Self {
            endpoint_url,
            retry: RetryPolicy::new(retries, delay),
            streams: file.streams(),
        }
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    pub fn streams(&self) -> Vec<StreamConfig> {
        self.streams.clone()
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}
