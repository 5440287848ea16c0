use super::{
    Client, ClientError, ClientResult, DescribeStreamOutput, GetRecordsOutput,
    GetShardIteratorOutput, ListStreamsOutput, PutRecordInput, PutRecordOutput,
};
use crate::types::{Record, ShardIteratorType, StreamDef, StreamDescription};

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_kinesis::{
    config::{Builder as ConfigBuilder, Credentials, SharedCredentialsProvider},
    error::{ProvideErrorMetadata, SdkError},
    primitives::Blob,
    Client as SdkClient,
};
use std::fmt::Debug;

/// Transport backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct KinesisClient {
    client: SdkClient,
}

impl KinesisClient {
    pub async fn builder() -> KinesisClientBuilder {
        KinesisClientBuilder::new().await
    }

    pub fn from_sdk(client: SdkClient) -> Self {
        Self { client }
    }
}

#[derive(Debug)]
pub struct KinesisClientBuilder {
    builder: ConfigBuilder,
}

impl KinesisClientBuilder {
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let builder = ConfigBuilder::from(&config);

        Self { builder }
    }

    pub fn endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => Self {
                builder: self.builder.endpoint_url(url),
            },
            None => self,
        }
    }

    pub fn credentials_provider(self, provider: SharedCredentialsProvider) -> Self {
        Self {
            builder: self.builder.credentials_provider(provider),
        }
    }

    pub fn static_credentials<A, S>(self, access_key_id: A, secret_access_key: S) -> Self
    where
        A: Into<String>,
        S: Into<String>,
    {
        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "kinesis-stream-static",
        );

        Self {
            builder: self.builder.credentials_provider(credentials),
        }
    }

    pub fn build(self) -> KinesisClient {
        let config = self.builder.build();
        KinesisClient {
            client: SdkClient::from_conf(config),
        }
    }
}

#[async_trait]
impl Client for KinesisClient {
    async fn create_stream(&self, stream_name: &str, shard_count: i32) -> ClientResult<()> {
        self.client
            .create_stream()
            .stream_name(stream_name)
            .shard_count(shard_count)
            .send()
            .await
            .map(drop)
            .map_err(from_sdk_err)
    }

    async fn delete_stream(&self, stream_name: &str) -> ClientResult<()> {
        self.client
            .delete_stream()
            .stream_name(stream_name)
            .send()
            .await
            .map(drop)
            .map_err(from_sdk_err)
    }

    async fn describe_stream(
        &self,
        stream: &StreamDef,
        exclusive_start_shard_id: Option<String>,
    ) -> ClientResult<DescribeStreamOutput> {
        self.client
            .describe_stream()
            .stream_name(stream.name())
            .set_exclusive_start_shard_id(exclusive_start_shard_id)
            .send()
            .await
            .map_err(from_sdk_err)?
            .stream_description
            .ok_or(ClientError::Malformed("stream_description"))
            .map(|description| {
                let has_more_shards = description.has_more_shards;

                DescribeStreamOutput {
                    description: StreamDescription::from_sdk(stream, description),
                    has_more_shards,
                }
            })
    }

    async fn list_streams(
        &self,
        limit: i32,
        exclusive_start_stream_name: Option<String>,
    ) -> ClientResult<ListStreamsOutput> {
        self.client
            .list_streams()
            .limit(limit)
            .set_exclusive_start_stream_name(exclusive_start_stream_name)
            .send()
            .await
            .map(|output| ListStreamsOutput {
                stream_names: output.stream_names,
                has_more_streams: output.has_more_streams,
            })
            .map_err(from_sdk_err)
    }

    async fn put_record(&self, input: PutRecordInput) -> ClientResult<PutRecordOutput> {
        let PutRecordInput {
            stream_name,
            data,
            partition_key,
            sequence_number_for_ordering,
            explicit_hash_key,
        } = input;

        self.client
            .put_record()
            .stream_name(stream_name)
            .data(Blob::new(data))
            .partition_key(partition_key)
            .set_sequence_number_for_ordering(sequence_number_for_ordering)
            .set_explicit_hash_key(explicit_hash_key)
            .send()
            .await
            .map(|output| PutRecordOutput {
                shard_id: output.shard_id,
                sequence_number: output.sequence_number,
            })
            .map_err(from_sdk_err)
    }

    async fn get_shard_iterator(
        &self,
        stream_name: &str,
        shard_id: &str,
        iterator_type: &ShardIteratorType,
    ) -> ClientResult<GetShardIteratorOutput> {
        self.client
            .get_shard_iterator()
            .stream_name(stream_name)
            .shard_id(shard_id)
            .shard_iterator_type(iterator_type.kind())
            .set_starting_sequence_number(iterator_type.sequence_number())
            .set_timestamp(iterator_type.timestamp())
            .send()
            .await
            .map(|output| GetShardIteratorOutput {
                iterator: output.shard_iterator,
            })
            .map_err(from_sdk_err)
    }

    async fn get_records(
        &self,
        iterator: &str,
        limit: Option<i32>,
    ) -> ClientResult<GetRecordsOutput> {
        self.client
            .get_records()
            .shard_iterator(iterator)
            .set_limit(limit)
            .send()
            .await
            .map(|output| GetRecordsOutput {
                records: output.records.into_iter().map(Record::from).collect(),
                next_iterator: output.next_shard_iterator,
                millis_behind_latest: output.millis_behind_latest,
            })
            .map_err(from_sdk_err)
    }
}

fn from_sdk_err<E, R>(err: SdkError<E, R>) -> ClientError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    let (code, message) = match err.as_service_error() {
        Some(e) => (
            e.code().map(str::to_owned),
            e.message().unwrap_or_default().to_owned(),
        ),
        None => (None, String::new()),
    };

    classify(code.as_deref(), message)
        .unwrap_or_else(|| ClientError::Service(anyhow::Error::from(err)))
}

/// Maps a service error code to the variant callers branch on. Unknown
/// codes keep the SDK error as an opaque cause.
fn classify(code: Option<&str>, message: String) -> Option<ClientError> {
    match code {
        Some("ResourceInUseException") => Some(ClientError::ResourceInUse(message)),
        Some("ResourceNotFoundException") => Some(ClientError::ResourceNotFound(message)),
        Some("ExpiredIteratorException") => Some(ClientError::ExpiredIterator(message)),
        _ => None,
    }
}
