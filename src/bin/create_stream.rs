use kinesis_stream::{config::StreamConfig, request::WaitStreamActive, Config, Executor};
use std::env;
use tokio::runtime::Handle;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::new();
    let executor = Executor::from_config(&config, Handle::current()).await;

    let streams = match env::args().nth(1) {
        Some(stream_name) => vec![StreamConfig::new(stream_name)],
        None => config.streams(),
    };

    if streams.is_empty() {
        error!("No streams to create. Pass a stream name or set a config file.");
        return;
    }

    let retry = config.retry();

    for entry in streams {
        let stream = match executor.execute(entry.create_request()).await {
            Ok(stream) => stream,
            Err(err) => {
                error!("Failed to create stream `{}`: {err}", entry.stream_name);
                continue;
            }
        };

        let wait =
            WaitStreamActive::new(stream.clone()).with_retry(retry.attempts(), retry.delay());

        match executor.execute(wait).await {
            Ok(description) => {
                info!(
                    "Stream `{stream}` is {} with {} shards: {}",
                    description.status(),
                    description.shards().len(),
                    description.arn()
                );
            }
            Err(err) => {
                error!("{err}");
                error!("{:#?}", err);
            }
        }
    }
}
