//! Asynchronous client for Amazon Kinesis Data Streams.
//!
//! Build a request from [`request`], hand it to an [`Executor`] and await
//! the returned [`Execution`]. Polling requests ([`request::DescribeStream`],
//! [`request::WaitStreamActive`]) retry within their budget; listing requests
//! follow the service's pagination cursors until every page is read.

pub mod client;
pub mod config;
mod engine;
mod error;
mod executor;
pub mod request;
pub mod types;

pub use client::{Client, ClientError, KinesisClient};
pub use config::Config;
pub use engine::{Engine, Execute};
pub use error::{Error, Result};
pub use executor::{Execution, Executor};
pub use types::{
    NextRecords, PutResult, Record, Shard, ShardIterator, ShardIteratorType, StreamDef,
    StreamDescription, StreamStatus,
};

pub const ENV_KINESIS_ENDPOINT_URL: &str = "KINESIS_ENDPOINT_URL";
pub const ENV_CONFIG_PATH: &str = "KINESIS_CONFIG_PATH";
pub const ENV_RETRIES: &str = "KINESIS_RETRIES";
pub const ENV_RETRY_DELAY_MS: &str = "KINESIS_RETRY_DELAY_MS";
