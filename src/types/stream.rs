use super::{into_chrono, Shard};

use aws_sdk_kinesis::types;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Identifies a stream by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StreamDef {
    name: String,
}

impl StreamDef {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for StreamDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for StreamDef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum StreamStatus {
    Creating,
    Deleting,
    Active,
    Updating,
    Unknown,
}

impl StreamStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, StreamStatus::Active)
    }
}

impl From<types::StreamStatus> for StreamStatus {
    fn from(status: types::StreamStatus) -> StreamStatus {
        match status {
            types::StreamStatus::Creating => StreamStatus::Creating,
            types::StreamStatus::Deleting => StreamStatus::Deleting,
            types::StreamStatus::Active => StreamStatus::Active,
            types::StreamStatus::Updating => StreamStatus::Updating,
            _ => StreamStatus::Unknown,
        }
    }
}

impl fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            StreamStatus::Creating => "CREATING",
            StreamStatus::Deleting => "DELETING",
            StreamStatus::Active => "ACTIVE",
            StreamStatus::Updating => "UPDATING",
            StreamStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{status}")
    }
}

/// Snapshot of a stream's remote state. The shard list is complete: every
/// page the service returned has been assembled into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescription {
    stream: StreamDef,
    arn: String,
    status: StreamStatus,
    retention_period_hours: i32,
    created_at: DateTime<Utc>,
    shards: Vec<Shard>,
}

impl StreamDescription {
    pub fn new(
        stream: StreamDef,
        arn: String,
        status: StreamStatus,
        retention_period_hours: i32,
        created_at: DateTime<Utc>,
        shards: Vec<Shard>,
    ) -> Self {
        Self {
            stream,
            arn,
            status,
            retention_period_hours,
            created_at,
            shards,
        }
    }

    pub(crate) fn from_sdk(stream: &StreamDef, value: types::StreamDescription) -> Self {
        let shards = value
            .shards
            .into_iter()
            .map(|shard| Shard::from_sdk(stream, shard))
            .collect();

        Self {
            stream: stream.clone(),
            arn: value.stream_arn,
            status: StreamStatus::from(value.stream_status),
            retention_period_hours: value.retention_period_hours,
            created_at: into_chrono(value.stream_creation_timestamp),
            shards,
        }
    }

    pub fn stream(&self) -> &StreamDef {
        &self.stream
    }

    pub fn arn(&self) -> &str {
        self.arn.as_str()
    }

    pub fn status(&self) -> StreamStatus {
        self.status
    }

    pub fn retention_period_hours(&self) -> i32 {
        self.retention_period_hours
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn shards(&self) -> &[Shard] {
        self.shards.as_slice()
    }

    pub fn into_shards(self) -> Vec<Shard> {
        self.shards
    }

    pub(crate) fn append_shards(&mut self, shards: &mut Vec<Shard>) {
        self.shards.append(shards);
    }

    pub(crate) fn last_shard_id(&self) -> Option<String> {
        self.shards.last().map(|shard| shard.id().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_converts_sdk_stream_status() {
        assert_eq!(
            StreamStatus::from(types::StreamStatus::Active),
            StreamStatus::Active
        );
        assert_eq!(
            StreamStatus::from(types::StreamStatus::Creating),
            StreamStatus::Creating
        );
        assert_eq!(
            StreamStatus::from(types::StreamStatus::from("SOMETHING_NEW")),
            StreamStatus::Unknown
        );
    }

    #[test]
    fn it_serializes_stream_status_in_uppercase() {
        let json = serde_json::to_string(&StreamStatus::Active).unwrap();
        assert_eq!(json, "\"ACTIVE\"");
        assert_eq!(StreamStatus::Updating.to_string(), "UPDATING");
    }
}
