//! Command planning for the extractor and the multiplexer
//!
//! Planners only assemble [`Invocation`]s. Spawning them is the job of a
//! [`ProcessPort`](crate::ports::ProcessPort).

pub mod extract;
pub mod mux;

pub use extract::ExtractorPlanner;
pub use mux::{MuxPlanner, MuxRequest};
