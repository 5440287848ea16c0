use kinesis_stream::{
    request::{GetNextRecords, GetShardIterator, ListStreamShards},
    Config, Executor, ShardIterator, ShardIteratorType, StreamDef,
};
use std::env;
use tokio::runtime::Handle;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

const BATCH_SIZE: u32 = 100;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let stream = StreamDef::new(env::args().nth(1).expect("stream name is required"));

    let config = Config::new();
    let executor = Executor::from_config(&config, Handle::current()).await;

    let shards = match executor.execute(ListStreamShards::new(stream.clone())).await {
        Ok(shards) => shards,
        Err(err) => {
            error!("Failed to list shards of `{stream}`: {err}");
            return;
        }
    };

    let mut readers = vec![];

    for shard in shards {
        let executor = executor.clone();

        readers.push(tokio::spawn(async move {
            let request = GetShardIterator::new(shard, ShardIteratorType::TrimHorizon);

            match executor.execute(request).await {
                Ok(iterator) => read_shard(&executor, iterator).await,
                Err(err) => error!("Failed to get shard iterator: {err}"),
            }
        }));
    }

    for reader in readers {
        if let Err(err) = reader.await {
            error!("{:#?}", err);
        }
    }
}

/// Prints records as JSON lines until the shard is closed or caught up.
async fn read_shard(executor: &Executor, mut iterator: ShardIterator) {
    loop {
        let shard_id = iterator.shard().id().to_string();

        let next = match executor
            .execute(GetNextRecords::new(iterator, BATCH_SIZE))
            .await
        {
            Ok(next) => next,
            Err(err) => {
                error!("Failed to read shard `{shard_id}`: {err}");
                return;
            }
        };

        for record in next.records.iter() {
            match serde_json::to_string(record) {
                Ok(line) => println!("{line}"),
                Err(err) => error!("{err}"),
            }
        }

        let caught_up = next.records.is_empty();

        match next.next {
            Some(successor) if !caught_up => iterator = successor,
            Some(_) => {
                info!("Shard `{shard_id}` is caught up");
                return;
            }
            None => {
                info!("Shard `{shard_id}` is closed");
                return;
            }
        }
    }
}
