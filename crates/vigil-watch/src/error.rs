use thiserror::Error;

/// Errors surfaced by the watch layer.
///
/// All of these are stream-fatal: the run loop reports them upward and
/// stops. Retry or reconnect is the event producer's responsibility.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("I/O error on event stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed watch event on line {line_no}: {source}")]
    MalformedEvent {
        line_no: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid watch target: {0}")]
    InvalidTarget(String),
}

pub type WatchResult<T> = Result<T, WatchError>;
