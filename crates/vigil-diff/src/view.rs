//! View projections: which part of a document gets tracked.

use std::fmt;

use serde_json::{Map, Value};

/// A named projection from a full document to the sub-tree being tracked.
///
/// Diffs are only meaningful between two documents projected through the
/// same view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// The whole document, unchanged.
    Full,
    /// The mapping under the top-level `status` key.
    Status,
}

impl View {
    /// Apply this view to a document. Total: never fails.
    ///
    /// `Status` yields the value at `"status"` only when the document is a
    /// mapping and that value is itself a mapping; in every other case it
    /// yields an empty mapping, so a missing or mistyped status is a
    /// no-change baseline rather than an error.
    pub fn apply(&self, doc: &Value) -> Value {
        match self {
            View::Full => doc.clone(),
            View::Status => match doc.get("status") {
                Some(Value::Object(status)) => Value::Object(status.clone()),
                _ => Value::Object(Map::new()),
            },
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Full => write!(f, "full"),
            View::Status => write!(f, "status"),
        }
    }
}
