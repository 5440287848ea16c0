use crate::{
    client::{Client, DescribeStreamOutput, ListStreamsOutput},
    error::Result,
    request::LIST_STREAMS_LIMIT,
    types::{StreamDef, StreamDescription},
};

use tracing::{debug, warn};

/// Collects every stream name, page after page, resuming each page after the
/// last name of the previous one.
pub(super) async fn list_streams(client: &dyn Client) -> Result<Vec<String>> {
    let mut names: Vec<String> = vec![];
    let mut exclusive_start: Option<String> = None;

    loop {
        let ListStreamsOutput {
            mut stream_names,
            has_more_streams,
        } = client
            .list_streams(LIST_STREAMS_LIMIT, exclusive_start.take())
            .await?;

        debug!(
            "Listed {} streams (more available: {has_more_streams})",
            stream_names.len()
        );

        let last_name = stream_names.last().cloned();
        names.append(&mut stream_names);

        match (has_more_streams, last_name) {
            (false, _) => break,
            (true, Some(name)) => exclusive_start = Some(name),
            (true, None) => {
                warn!("ListStreams reported more streams but returned an empty page");
                break;
            }
        }
    }

    Ok(names)
}

/// Describes a stream and assembles its complete shard list, resuming each
/// page after the last shard id seen.
pub(super) async fn describe_stream(
    client: &dyn Client,
    stream: &StreamDef,
) -> Result<StreamDescription> {
    let DescribeStreamOutput {
        mut description,
        mut has_more_shards,
    } = client.describe_stream(stream, None).await?;

    while has_more_shards {
        let Some(last_shard_id) = description.last_shard_id() else {
            warn!("DescribeStream of `{stream}` reported more shards but returned none");
            break;
        };

        let output = client.describe_stream(stream, Some(last_shard_id)).await?;
        let mut shards = output.description.into_shards();

        debug!(
            "Described {} more shards of `{stream}` (more available: {})",
            shards.len(),
            output.has_more_shards
        );

        if shards.is_empty() {
            warn!("DescribeStream of `{stream}` returned an empty shard page");
            break;
        }

        description.append_shards(&mut shards);
        has_more_shards = output.has_more_shards;
    }

    Ok(description)
}
