use kinesis_stream::{request::PutRecord, Config, Executor, StreamDef};
use std::env;
use tokio::runtime::Handle;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use ulid::Ulid;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut args = env::args().skip(1);
    let stream = StreamDef::new(args.next().expect("stream name is required"));
    let payload = args.next().unwrap_or_else(|| "{}".to_string());

    let config = Config::new();
    let executor = Executor::from_config(&config, Handle::current()).await;

    let request = PutRecord::new(stream, payload, Ulid::new().to_string());

    match executor.execute(request).await {
        Ok(result) => {
            info!(
                "Put record to shard `{}` at sequence number {}",
                result.shard_id, result.sequence_number
            );
        }
        Err(err) => {
            error!("{:#?}", err);
        }
    }
}
