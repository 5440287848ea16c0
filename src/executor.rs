use crate::{
    client::{Client, KinesisClient},
    config::Config,
    engine::{Engine, Execute},
    error::{Error, Result},
    request::Request,
};

use aws_sdk_kinesis::config::SharedCredentialsProvider;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::{runtime::Handle, task::JoinHandle};

/// Entry point: runs requests on the runtime it was built with.
///
/// ```rust,no_run
/// use kinesis_stream::{request::WaitStreamActive, Executor, StreamDef};
/// use std::time::Duration;
///
/// # async fn run() -> kinesis_stream::Result<()> {
/// let executor = Executor::from_env(tokio::runtime::Handle::current()).await;
/// let stream = StreamDef::new("orders");
///
/// let description = executor
///     .execute(WaitStreamActive::new(stream).with_retry(30, Duration::from_secs(2)))
///     .await?;
/// println!("{} is {}", description.stream(), description.status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Executor {
    engine: Engine,
    runtime: Handle,
}

impl Executor {
    pub fn new(client: Arc<dyn Client>, runtime: Handle) -> Self {
        Self {
            engine: Engine::new(client),
            runtime,
        }
    }

    /// Builds the transport from the default AWS configuration chain.
    pub async fn from_env(runtime: Handle) -> Self {
        let client = KinesisClient::builder().await.build();
        Self::new(Arc::new(client), runtime)
    }

    pub async fn from_config(config: &Config, runtime: Handle) -> Self {
        let client = KinesisClient::builder()
            .await
            .endpoint_url(config.endpoint_url())
            .build();
        Self::new(Arc::new(client), runtime)
    }

    pub async fn with_credentials_provider(
        provider: SharedCredentialsProvider,
        runtime: Handle,
    ) -> Self {
        let client = KinesisClient::builder()
            .await
            .credentials_provider(provider)
            .build();
        Self::new(Arc::new(client), runtime)
    }

    pub async fn with_static_credentials<A, S>(
        access_key_id: A,
        secret_access_key: S,
        runtime: Handle,
    ) -> Self
    where
        A: Into<String>,
        S: Into<String>,
    {
        let client = KinesisClient::builder()
            .await
            .static_credentials(access_key_id, secret_access_key)
            .build();
        Self::new(Arc::new(client), runtime)
    }

    /// Spawns the request on the executor's runtime. The request runs to
    /// completion even if the returned handle is dropped.
    pub fn execute<R>(&self, request: R) -> Execution<R::Output>
    where
        R: Request,
        Engine: Execute<R>,
    {
        let engine = self.engine.clone();
        let handle = self
            .runtime
            .spawn(async move { engine.execute(request).await });

        Execution { handle }
    }
}

/// Pending result of [`Executor::execute`].
#[derive(Debug)]
pub struct Execution<T> {
    handle: JoinHandle<Result<T>>,
}

impl<T> Execution<T> {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T> Future for Execution<T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().handle)
            .poll(cx)
            .map(|joined| joined.map_err(Error::from).and_then(|result| result))
    }
}
