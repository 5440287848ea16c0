use super::{
    Client, ClientError, ClientResult, DescribeStreamOutput, GetRecordsOutput,
    GetShardIteratorOutput, ListStreamsOutput, PutRecordInput, PutRecordOutput,
};
use crate::types::{ShardIteratorType, StreamDef};

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A call the engine made against the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateStream {
        stream_name: String,
        shard_count: i32,
    },
    DeleteStream {
        stream_name: String,
    },
    DescribeStream {
        stream_name: String,
        exclusive_start_shard_id: Option<String>,
    },
    ListStreams {
        limit: i32,
        exclusive_start_stream_name: Option<String>,
    },
    PutRecord(PutRecordInput),
    GetShardIterator {
        stream_name: String,
        shard_id: String,
        iterator_type: ShardIteratorType,
    },
    GetRecords {
        iterator: String,
        limit: Option<i32>,
    },
}

#[derive(Debug, Default)]
struct Source {
    create_stream: VecDeque<ClientResult<()>>,
    delete_stream: VecDeque<ClientResult<()>>,
    describe_stream: VecDeque<ClientResult<DescribeStreamOutput>>,
    list_streams: VecDeque<ClientResult<ListStreamsOutput>>,
    put_record: VecDeque<ClientResult<PutRecordOutput>>,
    get_shard_iterator: VecDeque<ClientResult<GetShardIteratorOutput>>,
    get_records: VecDeque<ClientResult<GetRecordsOutput>>,
    calls: Vec<Call>,
}

/// Serves queued responses in order and records every call. A call with
/// nothing queued fails with a service error.
#[derive(Debug, Default)]
pub struct MockClient {
    source: Mutex<Source>,
}

macro_rules! push_fn {
    ($name:ident, $field:ident, $output:ty) => {
        pub fn $name(&self, result: ClientResult<$output>) -> &Self {
            self.source.lock().unwrap().$field.push_back(result);
            self
        }
    };
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    push_fn!(push_create_stream, create_stream, ());
    push_fn!(push_delete_stream, delete_stream, ());
    push_fn!(push_describe_stream, describe_stream, DescribeStreamOutput);
    push_fn!(push_list_streams, list_streams, ListStreamsOutput);
    push_fn!(push_put_record, put_record, PutRecordOutput);
    push_fn!(push_get_shard_iterator, get_shard_iterator, GetShardIteratorOutput);
    push_fn!(push_get_records, get_records, GetRecordsOutput);

    pub fn calls(&self) -> Vec<Call> {
        self.source.lock().unwrap().calls.clone()
    }
}

fn next<T>(queue: &mut VecDeque<ClientResult<T>>, operation: &str) -> ClientResult<T> {
    queue.pop_front().unwrap_or_else(|| {
        Err(ClientError::Service(anyhow::anyhow!(
            "no response queued for `{operation}`"
        )))
    })
}

#[async_trait]
impl Client for MockClient {
    async fn create_stream(&self, stream_name: &str, shard_count: i32) -> ClientResult<()> {
        let mut source = self.source.lock().unwrap();
        source.calls.push(Call::CreateStream {
            stream_name: stream_name.into(),
            shard_count,
        });
        next(&mut source.create_stream, "create_stream")
    }

    async fn delete_stream(&self, stream_name: &str) -> ClientResult<()> {
        let mut source = self.source.lock().unwrap();
        source.calls.push(Call::DeleteStream {
            stream_name: stream_name.into(),
        });
        next(&mut source.delete_stream, "delete_stream")
    }

    async fn describe_stream(
        &self,
        stream: &StreamDef,
        exclusive_start_shard_id: Option<String>,
    ) -> ClientResult<DescribeStreamOutput> {
        let mut source = self.source.lock().unwrap();
        source.calls.push(Call::DescribeStream {
            stream_name: stream.name().into(),
            exclusive_start_shard_id,
        });
        next(&mut source.describe_stream, "describe_stream")
    }

    async fn list_streams(
        &self,
        limit: i32,
        exclusive_start_stream_name: Option<String>,
    ) -> ClientResult<ListStreamsOutput> {
        let mut source = self.source.lock().unwrap();
        source.calls.push(Call::ListStreams {
            limit,
            exclusive_start_stream_name,
        });
        next(&mut source.list_streams, "list_streams")
    }

    async fn put_record(&self, input: PutRecordInput) -> ClientResult<PutRecordOutput> {
        let mut source = self.source.lock().unwrap();
        source.calls.push(Call::PutRecord(input));
        next(&mut source.put_record, "put_record")
    }

    async fn get_shard_iterator(
        &self,
        stream_name: &str,
        shard_id: &str,
        iterator_type: &ShardIteratorType,
    ) -> ClientResult<GetShardIteratorOutput> {
        let mut source = self.source.lock().unwrap();
        source.calls.push(Call::GetShardIterator {
            stream_name: stream_name.into(),
            shard_id: shard_id.into(),
            iterator_type: iterator_type.clone(),
        });
        next(&mut source.get_shard_iterator, "get_shard_iterator")
    }

    async fn get_records(
        &self,
        iterator: &str,
        limit: Option<i32>,
    ) -> ClientResult<GetRecordsOutput> {
        let mut source = self.source.lock().unwrap();
        source.calls.push(Call::GetRecords {
            iterator: iterator.into(),
            limit,
        });
        next(&mut source.get_records, "get_records")
    }
}

#[tokio::test]
async fn mock_client_serves_queued_responses_in_order() {
    let client = MockClient::new();
    client
        .push_delete_stream(Ok(()))
        .push_delete_stream(Err(ClientError::ResourceNotFound("gone".into())));

    assert!(client.delete_stream("orders").await.is_ok());
    assert!(matches!(
        client.delete_stream("orders").await,
        Err(ClientError::ResourceNotFound(_))
    ));
    assert!(matches!(
        client.delete_stream("orders").await,
        Err(ClientError::Service(_))
    ));
    assert_eq!(client.calls().len(), 3);
}
