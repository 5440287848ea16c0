use super::StreamDef;

use aws_sdk_kinesis::types;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashKeyRange {
    pub starting_hash_key: String,
    pub ending_hash_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceNumberRange {
    pub starting_sequence_number: String,
    pub ending_sequence_number: Option<String>,
}

/// A shard listed under a stream. The parent ids describe the split/merge
/// hierarchy the shard was created from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shard {
    stream: StreamDef,
    id: String,
    parent: Option<String>,
    adjacent_parent: Option<String>,
    hash_key_range: Option<HashKeyRange>,
    sequence_number_range: Option<SequenceNumberRange>,
}

impl Shard {
    pub fn new<T: Into<String>>(stream: StreamDef, id: &str, parent: Option<T>) -> Self {
        Self {
            stream,
            id: id.into(),
            parent: parent.map(|s| s.into()),
            adjacent_parent: None,
            hash_key_range: None,
            sequence_number_range: None,
        }
    }

    pub(crate) fn from_sdk(stream: &StreamDef, value: types::Shard) -> Self {
        Self {
            stream: stream.clone(),
            id: value.shard_id,
            parent: value.parent_shard_id,
            adjacent_parent: value.adjacent_parent_shard_id,
            hash_key_range: value.hash_key_range.map(|range| HashKeyRange {
                starting_hash_key: range.starting_hash_key,
                ending_hash_key: range.ending_hash_key,
            }),
            sequence_number_range: value.sequence_number_range.map(|range| {
                SequenceNumberRange {
                    starting_sequence_number: range.starting_sequence_number,
                    ending_sequence_number: range.ending_sequence_number,
                }
            }),
        }
    }

    pub fn stream(&self) -> &StreamDef {
        &self.stream
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn adjacent_parent(&self) -> Option<&str> {
        self.adjacent_parent.as_deref()
    }

    pub fn hash_key_range(&self) -> Option<&HashKeyRange> {
        self.hash_key_range.as_ref()
    }

    pub fn sequence_number_range(&self) -> Option<&SequenceNumberRange> {
        self.sequence_number_range.as_ref()
    }

    /// A closed shard has been split or merged away and accepts no more writes.
    pub fn is_closed(&self) -> bool {
        self.sequence_number_range
            .as_ref()
            .map(|range| range.ending_sequence_number.is_some())
            .unwrap_or(false)
    }

    pub fn with_sequence_number_range(self, range: SequenceNumberRange) -> Self {
        Self {
            sequence_number_range: Some(range),
            ..self
        }
    }
}
