//! Structural diff engine for semi-structured documents.
//!
//! Compares two JSON-shaped documents and produces an ordered list of
//! structural changes, plus the view projections used to select which part
//! of a document gets tracked.
//!
//! # Key Types
//!
//! - [`TreeDiff`] / [`TreeChange`] -- Recursive document diff (added/removed/modified leaves)
//! - [`Path`] / [`PathSegment`] -- Location of a change within the document tree
//! - [`View`] -- Named projection from a full document to the tracked sub-tree

pub mod path;
pub mod tree_diff;
pub mod view;

pub use path::{Path, PathSegment};
pub use tree_diff::{diff_documents, TreeChange, TreeDiff};
pub use view::View;
