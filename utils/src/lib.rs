//! Helpers shared by the container tooling: textual operation scripts and
//! rendering.

pub mod ops;
pub mod render;

pub use ops::{ApplyError, ParseOpError, SequenceOperation};
pub use render::render_chain;
