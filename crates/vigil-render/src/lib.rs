//! Turns a tracked-change [`Outcome`](vigil_watch::Outcome) into styled
//! display lines.
//!
//! A creation renders as a `CREATED` heading over the pretty-printed
//! document; a change renders as a heading naming the event kind over one
//! line per structural change. An event whose diff is empty renders
//! nothing at all.

pub mod render;

pub use render::{render_outcome, RenderError};
