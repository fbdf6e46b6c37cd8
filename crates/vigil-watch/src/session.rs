//! The run loop: receive, project, diff, emit.

use tokio::sync::watch;

use vigil_diff::View;

use crate::error::WatchResult;
use crate::event::Event;
use crate::source::EventSource;
use crate::tracker::{Outcome, Tracker};

/// Where processed outcomes go (a renderer writing to a terminal, a buffer
/// in tests). An error from the sink is stream-fatal.
pub trait OutcomeSink {
    fn emit(&mut self, outcome: &Outcome) -> std::io::Result<()>;
}

/// One watched view of one resource: the view projection plus the tracker
/// holding the previous snapshot.
///
/// A session exclusively owns its tracker; tracking the same resource under
/// two views takes two sessions, each with independent state.
pub struct Session {
    view: View,
    tracker: Tracker,
}

impl Session {
    pub fn new(view: View) -> Self {
        Self {
            view,
            tracker: Tracker::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Process a single event: project the document through the session's
    /// view, then classify it against the previous snapshot.
    pub fn process(&mut self, event: Event) -> Outcome {
        let projected = self.view.apply(&event.object);
        self.tracker.observe(event.kind, projected)
    }

    /// Drive the session until the source closes, the shutdown channel
    /// fires (or its sender is dropped), or a fatal error occurs.
    ///
    /// Strictly sequential: each event is fully processed and emitted
    /// before the next receive, preserving the previous-snapshot invariant.
    pub async fn run<S, K>(
        &mut self,
        source: &mut S,
        sink: &mut K,
        mut shutdown: watch::Receiver<bool>,
    ) -> WatchResult<()>
    where
        S: EventSource,
        K: OutcomeSink,
    {
        tracing::info!(view = %self.view, "watch session started");
        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    tracing::info!(view = %self.view, "watch session cancelled");
                    return Ok(());
                }
                event = source.next_event() => match event? {
                    Some(event) => {
                        tracing::debug!(view = %self.view, kind = %event.kind, "event received");
                        let outcome = self.process(event);
                        sink.emit(&outcome)?;
                    }
                    None => {
                        tracing::info!(view = %self.view, "event stream closed");
                        return Ok(());
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ChangeKind;
    use crate::source::JsonLinesSource;
    use serde_json::json;

    #[derive(Default)]
    struct VecSink(Vec<Outcome>);

    impl OutcomeSink for VecSink {
        fn emit(&mut self, outcome: &Outcome) -> std::io::Result<()> {
            self.0.push(outcome.clone());
            Ok(())
        }
    }

    fn lines_source(input: &'static str) -> JsonLinesSource<&'static [u8]> {
        JsonLinesSource::new(input.as_bytes())
    }

    #[test]
    fn process_projects_before_tracking() {
        let mut session = Session::new(View::Status);
        assert_eq!(session.view(), View::Status);
        let outcome = session.process(Event {
            kind: ChangeKind::Added,
            object: json!({"spec": 1, "status": {"phase": "Pending"}}),
        });
        assert_eq!(outcome, Outcome::Created(json!({"phase": "Pending"})));
    }

    #[test]
    fn status_changes_diff_only_the_status_subtree() {
        let mut session = Session::new(View::Status);
        session.process(Event {
            kind: ChangeKind::Added,
            object: json!({"spec": 1, "status": {"phase": "Pending"}}),
        });
        let outcome = session.process(Event {
            kind: ChangeKind::Modified,
            object: json!({"spec": 2, "status": {"phase": "Running"}}),
        });
        match outcome {
            Outcome::Changed(_, diff) => {
                assert_eq!(diff.len(), 1);
                assert_eq!(diff.changes[0].path().to_string(), "phase");
            }
            other => panic!("expected Changed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn run_consumes_stream_to_end() {
        let input = concat!(
            "{\"type\": \"ADDED\", \"object\": {\"x\": 1}}\n",
            "{\"type\": \"MODIFIED\", \"object\": {\"x\": 2}}\n",
        );
        let mut source = lines_source(input);
        let mut sink = VecSink::default();
        let (_tx, rx) = watch::channel(false);

        let mut session = Session::new(View::Full);
        session.run(&mut source, &mut sink, rx).await.unwrap();

        assert_eq!(sink.0.len(), 2);
        assert!(matches!(sink.0[0], Outcome::Created(_)));
        assert!(matches!(sink.0[1], Outcome::Changed(ChangeKind::Modified, _)));
    }

    #[tokio::test]
    async fn run_stops_on_shutdown_signal() {
        // A reader that never yields keeps the loop pending on receive.
        let (_writer, reader) = tokio::io::duplex(64);
        let mut source = JsonLinesSource::new(tokio::io::BufReader::new(reader));
        let mut sink = VecSink::default();
        let (tx, rx) = watch::channel(false);

        let mut session = Session::new(View::Full);
        {
            let run = session.run(&mut source, &mut sink, rx);
            tokio::pin!(run);

            tokio::select! {
                _ = &mut run => panic!("run loop ended before shutdown"),
                _ = tokio::time::sleep(std::time::Duration::from_millis(10)) => {}
            }
            tx.send(true).unwrap();
            run.await.unwrap();
        }
        assert!(sink.0.is_empty());
    }

    #[tokio::test]
    async fn run_propagates_source_errors() {
        let mut source = lines_source("garbage\n");
        let mut sink = VecSink::default();
        let (_tx, rx) = watch::channel(false);

        let mut session = Session::new(View::Full);
        let result = session.run(&mut source, &mut sink, rx).await;
        assert!(result.is_err());
        assert!(sink.0.is_empty());
    }
}
