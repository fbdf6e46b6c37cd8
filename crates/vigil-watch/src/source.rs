//! The watch subsystem boundary: where events come from.

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::error::{WatchError, WatchResult};
use crate::event::Event;
use crate::target::Target;

/// Boundary trait for the subsystem producing watch events.
///
/// `Ok(None)` means the stream closed cleanly; any `Err` is stream-fatal.
/// Implementations own ordering and deduplication: the consumer applies
/// events exactly in the order they are yielded.
#[async_trait]
pub trait EventSource: Send {
    async fn next_event(&mut self) -> WatchResult<Option<Event>>;
}

/// Reads newline-delimited JSON watch events from any buffered reader.
///
/// Each non-blank line must be one `{"type": ..., "object": ...}` event
/// (the framing emitted by `kubectl get --watch --output-watch-events
/// -o json`-style producers). A malformed line is stream-fatal. With a
/// [`Target`] attached, events about other objects are silently skipped.
pub struct JsonLinesSource<R> {
    lines: Lines<R>,
    line_no: u64,
    target: Option<Target>,
}

impl<R: AsyncBufRead + Unpin + Send> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            target: None,
        }
    }

    /// Restrict the stream to events about the given resource.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    fn wanted(&self, object: &Value) -> bool {
        self.target.as_ref().map_or(true, |t| t.matches(object))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> EventSource for JsonLinesSource<R> {
    async fn next_event(&mut self) -> WatchResult<Option<Event>> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            let event: Event =
                serde_json::from_str(&line).map_err(|source| WatchError::MalformedEvent {
                    line_no: self.line_no,
                    source,
                })?;
            if self.wanted(&event.object) {
                return Ok(Some(event));
            }
            tracing::debug!(line = self.line_no, "skipping event for non-target object");
        }
        Ok(None)
    }
}
