// Domain models - Core types and data structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules;
use crate::error::{GrabError, GrabResult};

/// Format selector used when the operator accepts the default (video 137 + audio 140)
pub const DEFAULT_FORMAT: &str = "137+140";

/// Codec name meaning "copy the stream without re-encoding"
pub const PASSTHROUGH_CODEC: &str = "copy";

/// Default trim start
pub const DEFAULT_TRIM_FROM: &str = "00:00:00";

/// Extension appended to generated output filenames
pub const OUTPUT_EXTENSION: &str = ".mp4";

/// Live state reported by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveStatus {
    IsLive,
    IsUpcoming,
    WasLive,
    NotLive,
    PostLive,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for LiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LiveStatus::IsLive => "is_live",
            LiveStatus::IsUpcoming => "is_upcoming",
            LiveStatus::WasLive => "was_live",
            LiveStatus::NotLive => "not_live",
            LiveStatus::PostLive => "post_live",
            LiveStatus::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Resolved description of a remote video
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub full_title: String,
    /// Duration normalized to `HH:MM:SS`
    pub duration: String,
    /// Human-readable formats table, passed through from the extractor
    pub formats_table: String,
    pub is_live: bool,
    pub live_status: LiveStatus,
}

/// Optional `[from, to]` window applied to every input stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimWindow {
    pub from: String,
    pub to: String,
}

impl TrimWindow {
    /// Create a trim window; both ends must be well-formed `HH:MM:SS`.
    ///
    /// Ordering of `from` and `to` is left to the caller.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> GrabResult<Self> {
        let from = from.into();
        let to = to.into();

        for value in [&from, &to] {
            if !rules::is_well_formed_timestamp(value) {
                return Err(GrabError::InvalidTimestamp {
                    value: value.clone(),
                });
            }
        }

        Ok(Self { from, to })
    }
}

/// Target codecs for the mux step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecChoice {
    pub video: String,
    pub audio: String,
}

impl CodecChoice {
    pub fn new(video: impl Into<String>, audio: impl Into<String>) -> Self {
        Self {
            video: video.into(),
            audio: audio.into(),
        }
    }

    /// Both tracks are copied untouched
    pub fn is_passthrough(&self) -> bool {
        self.video == PASSTHROUGH_CODEC && self.audio == PASSTHROUGH_CODEC
    }
}

impl Default for CodecChoice {
    fn default() -> Self {
        Self::new(PASSTHROUGH_CODEC, PASSTHROUGH_CODEC)
    }
}

/// A fully assembled external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Count occurrences of an exact argument
    pub fn count_arg(&self, needle: &str) -> usize {
        self.args.iter().filter(|arg| arg.as_str() == needle).count()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote_for_display(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote_for_display(arg))?;
        }
        Ok(())
    }
}

/// Quote an argument when a shell would otherwise split or expand it.
///
/// Arguments containing `!` are single-quoted, since interactive shells
/// expand history inside double quotes.
fn quote_for_display(arg: &str) -> String {
    const SPECIAL: &[char] = &[
        '"', '\'', '\\', '$', '`', '&', '|', ';', '<', '>', '(', ')', '*', '?', '!', '#', '~',
        '[', ']', '{', '}',
    ];

    let needs_quotes =
        arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || SPECIAL.contains(&c));
    if !needs_quotes {
        return arg.to_string();
    }

    if arg.contains('!') {
        return format!("'{}'", arg.replace('\'', r"'\''"));
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Values threaded through the grab pipeline, one stage at a time.
///
/// Every `with_*` method consumes the previous state and returns the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub source: String,
    pub metadata: Option<Metadata>,
    pub format: String,
    pub links: Vec<String>,
    pub trim: Option<TrimWindow>,
    pub codecs: CodecChoice,
    pub output_filename: String,
    pub destination: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            source: String::new(),
            metadata: None,
            format: DEFAULT_FORMAT.to_string(),
            links: Vec::new(),
            trim: None,
            codecs: CodecChoice::default(),
            output_filename: String::new(),
            destination: String::new(),
        }
    }
}

impl Session {
    pub fn with_source(self, source: impl Into<String>) -> GrabResult<Self> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(GrabError::MissingSource);
        }
        Ok(Self { source, ..self })
    }

    pub fn with_metadata(self, metadata: Metadata) -> Self {
        Self {
            metadata: Some(metadata),
            ..self
        }
    }

    pub fn with_format(self, format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            ..self
        }
    }

    pub fn with_links(self, links: Vec<String>) -> Self {
        Self { links, ..self }
    }

    pub fn with_codecs(self, codecs: CodecChoice) -> Self {
        Self { codecs, ..self }
    }

    pub fn with_trim(self, trim: Option<TrimWindow>) -> Self {
        Self { trim, ..self }
    }

    pub fn with_output_filename(self, output_filename: impl Into<String>) -> Self {
        Self {
            output_filename: output_filename.into(),
            ..self
        }
    }

    pub fn with_destination(self, destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..self
        }
    }

    /// Normalized duration, or the zero timestamp before metadata is known
    pub fn duration(&self) -> &str {
        self.metadata
            .as_ref()
            .map(|m| m.duration.as_str())
            .unwrap_or(DEFAULT_TRIM_FROM)
    }

    /// Sanitized title plus extension
    pub fn default_output_filename(&self) -> String {
        let title = self.metadata.as_ref().map(|m| m.title.as_str()).unwrap_or("");
        rules::output_filename_for(title)
    }

    /// Destination directory joined with the output filename
    pub fn output_path(&self) -> String {
        rules::join_destination(&self.destination, &self.output_filename)
    }
}

/// Locations of the external tools and the default destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub extractor: String,
    pub muxer: String,
    pub destination: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extractor: "yt-dlp".to_string(),
            muxer: "ffmpeg".to_string(),
            destination: String::new(),
        }
    }
}

/// Partial configuration from one layer (file, environment, command line)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigOverrides {
    pub extractor: Option<String>,
    pub muxer: Option<String>,
    pub destination: Option<String>,
}

impl ConfigOverrides {
    /// Overlay the values that are set onto `base`
    pub fn apply(self, base: AppConfig) -> AppConfig {
        AppConfig {
            extractor: self.extractor.unwrap_or(base.extractor),
            muxer: self.muxer.unwrap_or(base.muxer),
            destination: self.destination.unwrap_or(base.destination),
        }
    }
}
