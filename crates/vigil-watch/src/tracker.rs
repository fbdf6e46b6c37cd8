//! Last-snapshot tracking: classify each event as initial or subsequent.

use serde_json::Value;

use vigil_diff::{diff_documents, TreeDiff};

use crate::event::ChangeKind;

/// What one observed event amounts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// First snapshot ever observed for this view.
    Created(Value),
    /// A subsequent snapshot, with its diff against the previous one. The
    /// diff may be empty; the baseline still advanced.
    Changed(ChangeKind, TreeDiff),
}

/// Per-view memory of the last observed (projected) snapshot.
///
/// One tracker per view, exclusively owned by the loop driving that view.
/// State lives only for the duration of a run.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    last: Option<Value>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last snapshot observed, if any.
    pub fn last(&self) -> Option<&Value> {
        self.last.as_ref()
    }

    /// Record one projected snapshot and classify it.
    ///
    /// The very first snapshot is `Created` regardless of `kind`; every
    /// later one is `Changed` with a diff against the previous snapshot.
    /// The baseline is replaced unconditionally, so an event with an empty
    /// diff still advances what the next event is compared against.
    pub fn observe(&mut self, kind: ChangeKind, projected: Value) -> Outcome {
        let outcome = match &self.last {
            None => Outcome::Created(projected.clone()),
            Some(previous) => Outcome::Changed(kind, diff_documents(previous, &projected)),
        };
        self.last = Some(projected);
        outcome
    }
}
