//! Recursive document diff: compare two trees and produce a list of changes.
//!
//! Documents are `serde_json::Value` trees. Mappings are compared by key,
//! sequences positionally by index, scalars by equality. Only leaves and
//! added/removed keys produce changes; no `Modified` is synthesized for a
//! container whose children changed.
//!
//! Mapping keys enumerate in lexicographic order (`serde_json::Map` is a
//! `BTreeMap`), so equal inputs always produce the same, deterministic
//! change order.

use serde_json::Value;

use crate::path::{Path, PathSegment};

/// The result of comparing two documents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeDiff {
    /// The list of changes between the old and new documents.
    pub changes: Vec<TreeChange>,
}

impl TreeDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of added elements.
    pub fn additions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, TreeChange::Added { .. }))
            .count()
    }

    /// Number of removed elements.
    pub fn removals(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, TreeChange::Removed { .. }))
            .count()
    }

    /// Number of modified elements.
    pub fn modifications(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, TreeChange::Modified { .. }))
            .count()
    }
}

/// A single structural change between two documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeChange {
    /// An element present only in the new document.
    Added { path: Path, value: Value },
    /// An element present only in the old document.
    Removed { path: Path, value: Value },
    /// An element whose value differs between the documents.
    Modified {
        path: Path,
        old: Value,
        new: Value,
    },
}

impl TreeChange {
    /// The path of the changed element.
    pub fn path(&self) -> &Path {
        match self {
            TreeChange::Added { path, .. }
            | TreeChange::Removed { path, .. }
            | TreeChange::Modified { path, .. } => path,
        }
    }
}

/// Compute the structural diff between two documents.
///
/// Total over all value shapes; equal inputs yield an empty diff. Sequences
/// are compared positionally, so an insertion in the middle of a sequence
/// reports a cascade of per-index modifications rather than a single
/// insertion.
pub fn diff_documents(old: &Value, new: &Value) -> TreeDiff {
    let mut changes = Vec::new();
    let mut path = Path::root();
    diff_at(&mut path, old, new, &mut changes);
    TreeDiff { changes }
}

fn diff_at(path: &mut Path, old: &Value, new: &Value, out: &mut Vec<TreeChange>) {
    match (old, new) {
        (Value::Object(old_map), Value::Object(new_map)) => {
            for (key, old_val) in old_map {
                match new_map.get(key) {
                    Some(new_val) => {
                        path.push(PathSegment::Key(key.clone()));
                        diff_at(path, old_val, new_val, out);
                        path.pop();
                    }
                    None => out.push(TreeChange::Removed {
                        path: path.child(PathSegment::Key(key.clone())),
                        value: old_val.clone(),
                    }),
                }
            }
            for (key, new_val) in new_map {
                if !old_map.contains_key(key) {
                    out.push(TreeChange::Added {
                        path: path.child(PathSegment::Key(key.clone())),
                        value: new_val.clone(),
                    });
                }
            }
        }
        (Value::Array(old_seq), Value::Array(new_seq)) => {
            for idx in 0..old_seq.len().max(new_seq.len()) {
                match (old_seq.get(idx), new_seq.get(idx)) {
                    (Some(old_val), Some(new_val)) => {
                        path.push(PathSegment::Index(idx));
                        diff_at(path, old_val, new_val, out);
                        path.pop();
                    }
                    (Some(old_val), None) => out.push(TreeChange::Removed {
                        path: path.child(PathSegment::Index(idx)),
                        value: old_val.clone(),
                    }),
                    (None, Some(new_val)) => out.push(TreeChange::Added {
                        path: path.child(PathSegment::Index(idx)),
                        value: new_val.clone(),
                    }),
                    (None, None) => unreachable!("index below max of both lengths"),
                }
            }
        }
        // Kind mismatch or scalar pair: a single leaf-level modification.
        (old_val, new_val) => {
            if old_val != new_val {
                out.push(TreeChange::Modified {
                    path: path.clone(),
                    old: old_val.clone(),
                    new: new_val.clone(),
                });
            }
        }
    }
}
