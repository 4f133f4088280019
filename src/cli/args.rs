//! Command-line argument definitions

use clap::{Args, ValueEnum};

use crate::domain::model::DEFAULT_FORMAT;

/// Arguments for the grab command
#[derive(Args, Debug, Default)]
pub struct GrabArgs {
    /// Source URL (skips the URL prompt)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Copy both tracks without asking for codecs
    #[arg(long)]
    pub skip_codecs: bool,

    /// Print the ffmpeg command instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

/// Output format for the info command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InfoFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Source URL
    pub url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = InfoFormat::Text)]
    pub output: InfoFormat,
}

/// Arguments for the links command
#[derive(Args, Debug)]
pub struct LinksArgs {
    /// Source URL
    pub url: String,

    /// Format selector passed to the extractor
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    pub format: String,
}
