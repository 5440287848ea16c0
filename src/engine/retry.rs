use crate::{error::Error, request::RetryPolicy, types::StreamStatus};

use std::fmt;
use std::future::Future;
use tokio::time::sleep;
use tracing::debug;

/// The retry budget ran out. `last` is the outcome of the final attempt.
#[derive(Debug)]
pub(super) struct Exhausted<E> {
    pub attempts: u32,
    pub last: E,
}

/// A failed attempt while waiting for a stream to become ACTIVE.
#[derive(Debug)]
pub(super) enum Miss {
    Failed(Error),
    Inactive(StreamStatus),
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Miss::Failed(err) => write!(f, "{err}"),
            Miss::Inactive(status) => write!(f, "stream is {status}"),
        }
    }
}

/// Runs `attempt` until it succeeds or the policy's attempts are used up,
/// sleeping the policy's delay between attempts.
pub(super) async fn poll<T, E, F, Fut>(
    policy: RetryPolicy,
    mut attempt: F,
) -> Result<T, Exhausted<E>>
where
    E: fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let attempts = policy.attempts();
    let mut made: u32 = 0;

    loop {
        made += 1;

        match attempt().await {
            Ok(value) => return Ok(value),
            Err(last) if made >= attempts => {
                debug!("Attempt {made}/{attempts} failed: {last}. No attempts left.");
                return Err(Exhausted {
                    attempts: made,
                    last,
                });
            }
            Err(err) => {
                debug!(
                    "Attempt {made}/{attempts} failed: {err}. Retrying in {:?}.",
                    policy.delay()
                );
                sleep(policy.delay()).await;
            }
        }
    }
}
