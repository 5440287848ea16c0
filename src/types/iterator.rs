use super::{from_chrono, Shard};

use aws_sdk_kinesis::{primitives, types};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where a new shard iterator starts reading.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShardIteratorType {
    AtSequenceNumber(String),
    AfterSequenceNumber(String),
    TrimHorizon,
    Latest,
    AtTimestamp(DateTime<Utc>),
}

impl ShardIteratorType {
    pub(crate) fn kind(&self) -> types::ShardIteratorType {
        match self {
            Self::AtSequenceNumber(_) => types::ShardIteratorType::AtSequenceNumber,
            Self::AfterSequenceNumber(_) => types::ShardIteratorType::AfterSequenceNumber,
            Self::TrimHorizon => types::ShardIteratorType::TrimHorizon,
            Self::Latest => types::ShardIteratorType::Latest,
            Self::AtTimestamp(_) => types::ShardIteratorType::AtTimestamp,
        }
    }

    pub(crate) fn sequence_number(&self) -> Option<String> {
        match self {
            Self::AtSequenceNumber(seq) | Self::AfterSequenceNumber(seq) => Some(seq.clone()),
            _ => None,
        }
    }

    pub(crate) fn timestamp(&self) -> Option<primitives::DateTime> {
        match self {
            Self::AtTimestamp(datetime) => Some(from_chrono(datetime)),
            _ => None,
        }
    }
}

/// Opaque cursor into one shard. The service expires it after a while;
/// reading from an expired iterator fails at the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShardIterator {
    shard: Shard,
    id: String,
}

impl ShardIterator {
    pub fn new<T: Into<String>>(shard: Shard, id: T) -> Self {
        Self {
            shard,
            id: id.into(),
        }
    }

    pub fn shard(&self) -> &Shard {
        &self.shard
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub(crate) fn successor(&self, id: String) -> Self {
        Self {
            shard: self.shard.clone(),
            id,
        }
    }
}
