mod iterator;
mod record;
mod shard;
mod stream;

pub use iterator::{ShardIterator, ShardIteratorType};
pub use record::{NextRecords, PutResult, Record};
pub use shard::{HashKeyRange, SequenceNumberRange, Shard};
pub use stream::{StreamDef, StreamDescription, StreamStatus};

use aws_sdk_kinesis::primitives;
use chrono::{DateTime, Utc};

fn into_chrono(datetime: primitives::DateTime) -> DateTime<Utc> {
    let secs = datetime.secs();
    let nsecs = datetime.subsec_nanos();
    DateTime::<Utc>::from_timestamp(secs, nsecs).unwrap_or_default()
}

fn from_chrono(datetime: &DateTime<Utc>) -> primitives::DateTime {
    primitives::DateTime::from_millis(datetime.timestamp_millis())
}
