//! CLI module for StreamGrab
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::{GrabArgs, InfoArgs, InfoFormat, LinksArgs};

/// StreamGrab
///
/// Downloads a remote video through yt-dlp and ffmpeg, optionally trimmed and
/// re-encoded, asking for each parameter interactively.
#[derive(Parser, Debug)]
#[command(name = "streamgrab")]
#[command(about = "StreamGrab - Download, trim and mux remote video interactively")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (overridden by RUST_LOG)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// TOML configuration file (default: ./streamgrab.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Extractor executable
    #[arg(long, env = "YTDLP_PATH", global = true)]
    pub extractor: Option<String>,

    /// Multiplexer executable
    #[arg(long, env = "FFMPEG_PATH", global = true)]
    pub muxer: Option<String>,

    /// Default download directory
    #[arg(long, env = "DEFAULT_DOWNLOAD_PATH", global = true)]
    pub destination: Option<String>,

    /// The command to execute (default: grab)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively download, trim and mux a video
    Grab(GrabArgs),
    /// Print the metadata the extractor reports for a URL
    Info(InfoArgs),
    /// Print the direct media links for a URL and format selector
    Links(LinksArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Grab(GrabArgs::default())
    }
}
