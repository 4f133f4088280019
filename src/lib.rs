//! StreamGrab Library
//!
//! Interactive orchestration of an extractor (yt-dlp) and a multiplexer
//! (ffmpeg): probe a remote video, resolve direct stream links, and build one
//! ffmpeg invocation that merges, optionally trims, and writes the result.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod planner;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::model::{
    AppConfig, CodecChoice, ConfigOverrides, Invocation, LiveStatus, Metadata, Session,
    TrimWindow,
};
pub use error::{GrabError, GrabResult};
pub use planner::{ExtractorPlanner, MuxPlanner, MuxRequest};
