use crate::{client::ClientError, types::StreamStatus};

use thiserror::Error;
use tokio::task::JoinError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Every attempt to describe the stream failed.
    #[error("Failed to describe stream `{stream}` after {attempts} attempts")]
    RetriesExhausted {
        stream: String,
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    /// The stream was not observed ACTIVE within the retry budget.
    /// `last_status` is set when the last attempt described the stream,
    /// `source` when it failed.
    #[error("Stream `{stream}` did not become ACTIVE after {attempts} attempts")]
    NotActive {
        stream: String,
        attempts: u32,
        last_status: Option<StreamStatus>,
        #[source]
        source: Option<Box<Error>>,
    },

    /// A request parameter the service cannot represent.
    #[error("Invalid argument `{name}`: {value}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("Execution task failed: {0}")]
    Join(#[from] JoinError),
}

impl Error {
    /// The error of the last attempt, if this error ends a retry loop.
    pub fn last_attempt_error(&self) -> Option<&Error> {
        match self {
            Error::RetriesExhausted { source, .. } => Some(source.as_ref()),
            Error::NotActive { source, .. } => source.as_deref(),
            _ => None,
        }
    }

    pub fn is_resource_not_found(&self) -> bool {
        matches!(self, Error::Client(ClientError::ResourceNotFound(_)))
    }
}
