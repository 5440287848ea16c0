use super::{into_chrono, ShardIterator, StreamDef};

use aws_sdk_kinesis::types;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    sequence_number: String,
    partition_key: String,
    data: Vec<u8>,
    approximate_arrival_timestamp: Option<DateTime<Utc>>,
}

impl Record {
    pub fn new<S, P>(sequence_number: S, partition_key: P, data: Vec<u8>) -> Self
    where
        S: Into<String>,
        P: Into<String>,
    {
        Self {
            sequence_number: sequence_number.into(),
            partition_key: partition_key.into(),
            data,
            approximate_arrival_timestamp: None,
        }
    }

    pub fn sequence_number(&self) -> &str {
        self.sequence_number.as_str()
    }

    pub fn partition_key(&self) -> &str {
        self.partition_key.as_str()
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    pub fn approximate_arrival_timestamp(&self) -> Option<DateTime<Utc>> {
        self.approximate_arrival_timestamp
    }
}

impl From<types::Record> for Record {
    fn from(value: types::Record) -> Record {
        Record {
            sequence_number: value.sequence_number,
            partition_key: value.partition_key,
            data: value.data.into_inner(),
            approximate_arrival_timestamp: value.approximate_arrival_timestamp.map(into_chrono),
        }
    }
}

/// A batch read from a shard and the iterator to continue from.
///
/// `next` is None once the shard is closed: no more records will ever be
/// returned for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRecords {
    pub records: Vec<Record>,
    pub next: Option<ShardIterator>,
    pub millis_behind_latest: Option<i64>,
}

impl NextRecords {
    pub fn is_closed(&self) -> bool {
        self.next.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutResult {
    pub stream: StreamDef,
    pub shard_id: String,
    pub sequence_number: String,
}
