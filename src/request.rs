//! Typed descriptors, one per remote operation. They hold parameters only;
//! the engine decides how each one runs.

use crate::types::{
    NextRecords, PutResult, Shard, ShardIterator, ShardIteratorType, StreamDef,
    StreamDescription,
};

use std::time::Duration;

pub const DEFAULT_RETRIES: u32 = 10;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Page size of every list-streams call.
pub const LIST_STREAMS_LIMIT: i32 = 10;

mod sealed {
    pub trait Sealed {}
}

/// A request and the value its execution resolves to.
pub trait Request: sealed::Sealed + Send + 'static {
    type Output: Send + 'static;
}

macro_rules! request {
    ($request:ty => $output:ty) => {
        impl sealed::Sealed for $request {}

        impl Request for $request {
            type Output = $output;
        }
    };
}

request!(CreateStream => StreamDef);
request!(DeleteStream => ());
request!(TryDescribeStream => StreamDescription);
request!(DescribeStream => StreamDescription);
request!(WaitStreamActive => StreamDescription);
request!(ListStreams => Vec<String>);
request!(PutRecord => PutResult);
request!(ListStreamShards => Vec<Shard>);
request!(GetShardIterator => ShardIterator);
request!(GetNextRecords => NextRecords);

/// Retry budget of a polling request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }

    /// At least one attempt is always made.
    pub fn attempts(&self) -> u32 {
        self.attempts.max(1)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRIES, DEFAULT_RETRY_DELAY)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateStream {
    pub stream: StreamDef,
    pub shard_count: u32,
}

impl CreateStream {
    pub fn new(stream: StreamDef, shard_count: u32) -> Self {
        Self {
            stream,
            shard_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStream {
    pub stream: StreamDef,
}

impl DeleteStream {
    pub fn new(stream: StreamDef) -> Self {
        Self { stream }
    }
}

/// Describe once, without retrying.
#[derive(Debug, Clone, PartialEq)]
pub struct TryDescribeStream {
    pub stream: StreamDef,
}

impl TryDescribeStream {
    pub fn new(stream: StreamDef) -> Self {
        Self { stream }
    }
}

/// Describe, retrying failed attempts within the policy's budget.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeStream {
    pub stream: StreamDef,
    pub retry: RetryPolicy,
}

impl DescribeStream {
    pub fn new(stream: StreamDef) -> Self {
        Self {
            stream,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(self, retries: u32, delay: Duration) -> Self {
        Self {
            retry: RetryPolicy::new(retries, delay),
            ..self
        }
    }
}

/// Describe until the stream is ACTIVE. A description in any other status
/// counts as a failed attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitStreamActive {
    pub stream: StreamDef,
    pub retry: RetryPolicy,
}

impl WaitStreamActive {
    pub fn new(stream: StreamDef) -> Self {
        Self {
            stream,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(self, retries: u32, delay: Duration) -> Self {
        Self {
            retry: RetryPolicy::new(retries, delay),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListStreams;

#[derive(Debug, Clone, PartialEq)]
pub struct PutRecord {
    pub stream: StreamDef,
    pub data: Vec<u8>,
    pub partition_key: String,
    /// Minimum sequence number the write must be ordered after.
    pub min_sequence_number: Option<String>,
    pub explicit_hash_key: Option<String>,
}

impl PutRecord {
    pub fn new<D, K>(stream: StreamDef, data: D, partition_key: K) -> Self
    where
        D: Into<Vec<u8>>,
        K: Into<String>,
    {
        Self {
            stream,
            data: data.into(),
            partition_key: partition_key.into(),
            min_sequence_number: None,
            explicit_hash_key: None,
        }
    }

    pub fn after<T: Into<String>>(self, min_sequence_number: T) -> Self {
        Self {
            min_sequence_number: Some(min_sequence_number.into()),
            ..self
        }
    }

    pub fn explicit_hash_key<T: Into<String>>(self, hash_key: T) -> Self {
        Self {
            explicit_hash_key: Some(hash_key.into()),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListStreamShards {
    pub stream: StreamDef,
}

impl ListStreamShards {
    pub fn new(stream: StreamDef) -> Self {
        Self { stream }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetShardIterator {
    pub shard: Shard,
    pub iterator_type: ShardIteratorType,
}

impl GetShardIterator {
    pub fn new(shard: Shard, iterator_type: ShardIteratorType) -> Self {
        Self {
            shard,
            iterator_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetNextRecords {
    pub iterator: ShardIterator,
    /// Maximum number of records in the batch.
    pub limit: u32,
}

impl GetNextRecords {
    pub fn new(iterator: ShardIterator, limit: u32) -> Self {
        Self { iterator, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_policy_makes_at_least_one_attempt() {
        let policy = RetryPolicy::new(0, Duration::from_millis(10));
        assert_eq!(policy.attempts(), 1);

        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        assert_eq!(policy.attempts(), 3);
    }

    #[test]
    fn put_record_has_no_ordering_constraint_by_default() {
        let put = PutRecord::new(StreamDef::new("orders"), "payload", "key");
        assert!(put.min_sequence_number.is_none());

        let put = put.after("123");
        assert_eq!(put.min_sequence_number.as_deref(), Some("123"));
    }
}
