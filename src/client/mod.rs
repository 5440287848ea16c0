mod kinesis;
#[cfg(test)]
mod mock;

use crate::types::{Record, ShardIteratorType, StreamDef, StreamDescription};

use async_trait::async_trait;
use thiserror::Error;

pub use kinesis::{KinesisClient, KinesisClientBuilder};
#[cfg(test)]
pub use mock::{Call, MockClient};

/// Failure reported by the remote service or the SDK underneath it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The resource already exists or is being changed. Creating a stream
    /// that already exists reports this.
    #[error("Resource in use: {0}")]
    ResourceInUse(String),
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    #[error("Shard iterator expired: {0}")]
    ExpiredIterator(String),
    #[error("`{0}` is None in the response")]
    Malformed(&'static str),
    #[error(transparent)]
    Service(#[from] anyhow::Error),
}

/// One page of a describe-stream call. `description` only holds the shards
/// of this page.
#[derive(Debug, Clone)]
pub struct DescribeStreamOutput {
    pub description: StreamDescription,
    pub has_more_shards: bool,
}

#[derive(Debug, Clone)]
pub struct ListStreamsOutput {
    pub stream_names: Vec<String>,
    pub has_more_streams: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PutRecordInput {
    pub stream_name: String,
    pub data: Vec<u8>,
    pub partition_key: String,
    pub sequence_number_for_ordering: Option<String>,
    pub explicit_hash_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PutRecordOutput {
    pub shard_id: String,
    pub sequence_number: String,
}

#[derive(Debug, Clone)]
pub struct GetShardIteratorOutput {
    pub iterator: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetRecordsOutput {
    pub records: Vec<Record>,
    pub next_iterator: Option<String>,
    pub millis_behind_latest: Option<i64>,
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Remote calls against the stream service. Implementations are shared by
/// every concurrent execution and must be safe for concurrent use.
#[async_trait]
pub trait Client: Send + Sync {
    async fn create_stream(&self, stream_name: &str, shard_count: i32) -> ClientResult<()>;

    async fn delete_stream(&self, stream_name: &str) -> ClientResult<()>;

    async fn describe_stream(
        &self,
        stream: &StreamDef,
        exclusive_start_shard_id: Option<String>,
    ) -> ClientResult<DescribeStreamOutput>;

    async fn list_streams(
        &self,
        limit: i32,
        exclusive_start_stream_name: Option<String>,
    ) -> ClientResult<ListStreamsOutput>;

    async fn put_record(&self, input: PutRecordInput) -> ClientResult<PutRecordOutput>;

    async fn get_shard_iterator(
        &self,
        stream_name: &str,
        shard_id: &str,
        iterator_type: &ShardIteratorType,
    ) -> ClientResult<GetShardIteratorOutput>;

    async fn get_records(
        &self,
        iterator: &str,
        limit: Option<i32>,
    ) -> ClientResult<GetRecordsOutput>;
}
