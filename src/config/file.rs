use crate::{request::CreateStream, types::StreamDef};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

const DEFAULT_SHARD_COUNT: u32 = 1;

/// Streams to provision, read from YAML:
///
/// ```yaml
/// streams:
///   - stream_name: Orders
///     shard_count: 4
///   - stream_name: Clicks   # one shard
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    streams: Vec<StreamConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StreamConfig {
    pub stream_name: String,
    #[serde(default = "default_shard_count")]
    pub shard_count: u32,
}

fn default_shard_count() -> u32 {
    DEFAULT_SHARD_COUNT
}

impl StreamConfig {
    pub fn new<T: Into<String>>(stream_name: T) -> Self {
        Self {
            stream_name: stream_name.into(),
            shard_count: DEFAULT_SHARD_COUNT,
        }
    }

    pub fn create_request(&self) -> CreateStream {
        CreateStream::new(StreamDef::new(self.stream_name.as_str()), self.shard_count)
    }
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl ConfigFile {
    /// Loads the file if a path is given. A file that cannot be loaded is
    /// logged and treated as listing no streams.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Self {
        path.map(|path| {
            load(path.as_ref()).unwrap_or_else(|err| {
                warn!("{err}. No streams will be provisioned from it.");
                ConfigFile::default()
            })
        })
        .unwrap_or_default()
    }

    /// Entries with a zero shard count are skipped, since the service
    /// rejects them.
    pub fn streams(&self) -> Vec<StreamConfig> {
        self.streams
            .iter()
            .filter(|stream| {
                if stream.shard_count == 0 {
                    warn!("Skip stream `{}` with zero shards.", stream.stream_name);
                }
                stream.shard_count > 0
            })
            .cloned()
            .collect()
    }
}

fn load(path: &Path) -> Result<ConfigFile, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
