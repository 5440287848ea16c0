mod paginate;
mod retry;

use crate::{
    client::{Client, ClientError, GetShardIteratorOutput, PutRecordInput},
    error::{Error, Result},
    request::{
        CreateStream, DeleteStream, DescribeStream, GetNextRecords, GetShardIterator,
        ListStreamShards, ListStreams, PutRecord, Request, TryDescribeStream, WaitStreamActive,
    },
    types::{NextRecords, PutResult, Shard, ShardIterator, StreamDef, StreamDescription},
};

use async_trait::async_trait;
use retry::{Exhausted, Miss};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs a request against the transport.
#[async_trait]
pub trait Execute<R: Request> {
    async fn execute(&self, request: R) -> Result<R::Output>;
}

/// Maps requests to transport calls. Holds no state besides the shared
/// transport handle, so clones are independent and cheap.
#[derive(Clone)]
pub struct Engine {
    client: Arc<dyn Client>,
}

impl Engine {
    pub fn new(client: Arc<dyn Client>) -> Self {
        Self { client }
    }

    fn client(&self) -> &dyn Client {
        self.client.as_ref()
    }

    async fn try_describe(&self, stream: &StreamDef) -> Result<StreamDescription> {
        paginate::describe_stream(self.client(), stream).await
    }
}

/// The service takes 32-bit signed counts.
fn to_i32(name: &'static str, value: u32) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

#[async_trait]
impl Execute<CreateStream> for Engine {
    async fn execute(&self, request: CreateStream) -> Result<StreamDef> {
        let CreateStream {
            stream,
            shard_count,
        } = request;
        let shard_count = to_i32("shard_count", shard_count)?;

        match self.client().create_stream(stream.name(), shard_count).await {
            Ok(()) => Ok(stream),
            // Provisioning is repeatable: an existing stream is not a failure.
            Err(ClientError::ResourceInUse(message)) => {
                info!("Stream `{stream}` already exists: {message}");
                Ok(stream)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl Execute<DeleteStream> for Engine {
    async fn execute(&self, request: DeleteStream) -> Result<()> {
        self.client()
            .delete_stream(request.stream.name())
            .await
            .map_err(Error::from)
    }
}

#[async_trait]
impl Execute<TryDescribeStream> for Engine {
    async fn execute(&self, request: TryDescribeStream) -> Result<StreamDescription> {
        self.try_describe(&request.stream).await
    }
}

#[async_trait]
impl Execute<DescribeStream> for Engine {
    async fn execute(&self, request: DescribeStream) -> Result<StreamDescription> {
        let stream = &request.stream;

        retry::poll(request.retry, move || self.try_describe(stream))
            .await
            .map_err(|Exhausted { attempts, last }| Error::RetriesExhausted {
                stream: stream.name().into(),
                attempts,
                source: Box::new(last),
            })
    }
}

#[async_trait]
impl Execute<WaitStreamActive> for Engine {
    async fn execute(&self, request: WaitStreamActive) -> Result<StreamDescription> {
        let stream = &request.stream;

        retry::poll(request.retry, move || async move {
            let description = self.try_describe(stream).await.map_err(Miss::Failed)?;

            if description.status().is_active() {
                Ok(description)
            } else {
                Err(Miss::Inactive(description.status()))
            }
        })
        .await
        .map_err(|Exhausted { attempts, last }| {
            let (last_status, source) = match last {
                Miss::Failed(err) => (None, Some(Box::new(err))),
                Miss::Inactive(status) => (Some(status), None),
            };

            Error::NotActive {
                stream: stream.name().into(),
                attempts,
                last_status,
                source,
            }
        })
    }
}

#[async_trait]
impl Execute<ListStreams> for Engine {
    async fn execute(&self, _request: ListStreams) -> Result<Vec<String>> {
        paginate::list_streams(self.client()).await
    }
}

#[async_trait]
impl Execute<PutRecord> for Engine {
    async fn execute(&self, request: PutRecord) -> Result<PutResult> {
        let PutRecord {
            stream,
            data,
            partition_key,
            min_sequence_number,
            explicit_hash_key,
        } = request;

        let input = PutRecordInput {
            stream_name: stream.name().into(),
            data,
            partition_key,
            sequence_number_for_ordering: min_sequence_number,
            explicit_hash_key,
        };

        let output = self.client().put_record(input).await?;
        debug!(
            "Put record to shard `{}` of `{stream}` at {}",
            output.shard_id, output.sequence_number
        );

        Ok(PutResult {
            stream,
            shard_id: output.shard_id,
            sequence_number: output.sequence_number,
        })
    }
}

#[async_trait]
impl Execute<ListStreamShards> for Engine {
    async fn execute(&self, request: ListStreamShards) -> Result<Vec<Shard>> {
        self.try_describe(&request.stream)
            .await
            .map(StreamDescription::into_shards)
    }
}

#[async_trait]
impl Execute<GetShardIterator> for Engine {
    async fn execute(&self, request: GetShardIterator) -> Result<ShardIterator> {
        let GetShardIterator {
            shard,
            iterator_type,
        } = request;

        let GetShardIteratorOutput { iterator } = self
            .client()
            .get_shard_iterator(shard.stream().name(), shard.id(), &iterator_type)
            .await?;

        iterator
            .map(|id| ShardIterator::new(shard, id))
            .ok_or(Error::Client(ClientError::Malformed("shard_iterator")))
    }
}

#[async_trait]
impl Execute<GetNextRecords> for Engine {
    async fn execute(&self, request: GetNextRecords) -> Result<NextRecords> {
        let GetNextRecords { iterator, limit } = request;
        let limit = to_i32("limit", limit)?;

        let output = self.client().get_records(iterator.id(), Some(limit)).await?;

        if output.next_iterator.is_none() {
            debug!("Shard `{}` is closed", iterator.shard().id());
        }

        Ok(NextRecords {
            records: output.records,
            next: output.next_iterator.map(|id| iterator.successor(id)),
            millis_behind_latest: output.millis_behind_latest,
        })
    }
}
