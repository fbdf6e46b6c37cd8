//! Watch events: one labeled document snapshot per event.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Why a new snapshot arrived.
///
/// Display labeling only: the kind never affects diff computation, and the
/// first snapshot a tracker sees is always reported as a creation whatever
/// its kind. `Bookmark` and `Error` carry upstream progress and failure
/// notices through the same pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Bookmark,
    Error,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeKind::Added => "ADDED",
            ChangeKind::Modified => "MODIFIED",
            ChangeKind::Deleted => "DELETED",
            ChangeKind::Bookmark => "BOOKMARK",
            ChangeKind::Error => "ERROR",
        };
        write!(f, "{}", label)
    }
}

/// One event from the watch stream.
///
/// Wire form matches the newline-delimited watch framing
/// (`{"type": "MODIFIED", "object": {...}}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Why the snapshot arrived.
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    /// The full observed document.
    pub object: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_kind_names_are_uppercase() {
        let event: Event =
            serde_json::from_value(json!({"type": "MODIFIED", "object": {"a": 1}})).unwrap();
        assert_eq!(event.kind, ChangeKind::Modified);
        assert_eq!(event.object, json!({"a": 1}));
    }

    #[test]
    fn all_kinds_round_trip() {
        for kind in [
            ChangeKind::Added,
            ChangeKind::Modified,
            ChangeKind::Deleted,
            ChangeKind::Bookmark,
            ChangeKind::Error,
        ] {
            let wire = serde_json::to_string(&kind).unwrap();
            assert_eq!(wire, format!("\"{}\"", kind));
            let back: ChangeKind = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn unknown_kind_rejected() {
        let result: Result<Event, _> =
            serde_json::from_value(json!({"type": "RESYNC", "object": {}}));
        assert!(result.is_err());
    }
}
