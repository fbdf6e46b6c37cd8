//! Event intake and change tracking for a watched resource.
//!
//! Consumes a stream of labeled document snapshots from an [`EventSource`],
//! projects each snapshot through a view, and tracks the last-seen snapshot
//! so that every subsequent event can be reported as a structural diff.
//!
//! # Key Types
//!
//! - [`Event`] / [`ChangeKind`] -- One labeled snapshot from the watch stream
//! - [`EventSource`] -- Boundary trait for the watch subsystem
//! - [`Target`] -- Which resource the stream is about
//! - [`Tracker`] / [`Outcome`] -- Last-snapshot state and per-event classification
//! - [`Session`] -- The sequential receive-project-diff-emit run loop

pub mod error;
pub mod event;
pub mod session;
pub mod source;
pub mod target;
pub mod tracker;

pub use error::{WatchError, WatchResult};
pub use event::{ChangeKind, Event};
pub use session::{OutcomeSink, Session};
pub use source::{EventSource, JsonLinesSource};
pub use target::Target;
pub use tracker::{Outcome, Tracker};
