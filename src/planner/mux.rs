//! Multiplexer command synthesis
//!
//! Every resolved link becomes its own input. Video and audio usually arrive
//! as separate URLs and must be merged, so the trim window is repeated on each
//! input instead of being applied once to the output.

use tracing::debug;

use crate::domain::model::{CodecChoice, Invocation, TrimWindow, PASSTHROUGH_CODEC};
use crate::domain::rules::join_destination;
use crate::error::{GrabError, GrabResult};

/// Everything the multiplexer invocation depends on
#[derive(Debug, Clone)]
pub struct MuxRequest<'a> {
    pub links: &'a [String],
    pub trim: Option<&'a TrimWindow>,
    pub codecs: &'a CodecChoice,
    pub destination: &'a str,
    pub output_filename: &'a str,
}

/// Builds multiplexer command lines
#[derive(Debug, Clone)]
pub struct MuxPlanner {
    program: String,
}

impl MuxPlanner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable the invocation runs
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Assemble the mux invocation. Pure: equal requests give equal invocations.
    pub fn synthesize(&self, request: &MuxRequest<'_>) -> GrabResult<Invocation> {
        if request.links.is_empty() {
            return Err(GrabError::SynthesisPrecondition);
        }

        let mut invocation = Invocation::new(&self.program);
        for link in request.links {
            if let Some(trim) = request.trim {
                invocation = invocation.args(["-ss", trim.from.as_str(), "-to", trim.to.as_str()]);
            }
            invocation = invocation.args(["-i", link.as_str()]);
        }

        invocation = if request.codecs.is_passthrough() {
            invocation.args(["-c", PASSTHROUGH_CODEC])
        } else {
            invocation.args([
                "-c:v",
                request.codecs.video.as_str(),
                "-c:a",
                request.codecs.audio.as_str(),
            ])
        };

        let output_path = join_destination(request.destination, request.output_filename);
        debug!(inputs = request.links.len(), output = %output_path, "Synthesized mux command");

        Ok(invocation.arg("-y").arg(output_path))
    }
}
