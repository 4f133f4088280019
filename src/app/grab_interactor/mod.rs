// Grab interactor - Drives the interactive download pipeline
//
// The pipeline is an ordered list of stages run by a single loop. Each stage
// takes the previous session by value and returns the next one.

use std::sync::Arc;

use tracing::{info, warn};

use crate::app::{LinksInteractor, MetadataInteractor};
use crate::domain::model::*;
use crate::error::{GrabError, GrabResult};
use crate::planner::{MuxPlanner, MuxRequest};
use crate::ports::{describe_exit, ConsolePort, ProcessPort};

/// Options for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct GrabRequest {
    /// Source URL; prompted for when absent
    pub source: Option<String>,
    /// Copy both tracks without asking for codecs
    pub skip_codecs: bool,
    /// Print the mux command without running it
    pub dry_run: bool,
}

/// Outcome of a pipeline run
#[derive(Debug, Clone)]
pub struct GrabReport {
    pub session: Session,
    pub invocation: Invocation,
    pub output_path: String,
    pub executed: bool,
}

/// Values prompt defaults may depend on besides the session
#[derive(Debug, Clone)]
pub struct StageContext {
    pub default_destination: String,
}

/// One operator prompt: label, default supplier and session setter
#[derive(Clone, Copy)]
pub struct PromptStep {
    pub label: &'static str,
    pub default: fn(&Session, &StageContext) -> String,
    pub apply: fn(Session, String) -> GrabResult<Session>,
}

impl std::fmt::Debug for PromptStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptStep").field("label", &self.label).finish()
    }
}

/// Pipeline stage
#[derive(Debug, Clone, Copy)]
pub enum Stage {
    /// Ask one question and store the answer
    Ask(PromptStep),
    /// Ask for trim start and end; both blank means no trim
    AskTrim,
    /// Run the extractor in probe mode
    Probe,
    /// Run the extractor in link resolution mode
    ResolveLinks,
}

const SOURCE_STEP: PromptStep = PromptStep {
    label: "Please, input URL",
    default: |_, _| String::new(),
    apply: |session, source| session.with_source(source),
};

const FORMAT_STEP: PromptStep = PromptStep {
    label: "Input wanted format",
    default: |_, _| DEFAULT_FORMAT.to_string(),
    apply: |session, format| Ok(session.with_format(format)),
};

const VIDEO_CODEC_STEP: PromptStep = PromptStep {
    label: "Video codec",
    default: |session, _| session.codecs.video.clone(),
    apply: |session, video| {
        let codecs = CodecChoice::new(video, session.codecs.audio.clone());
        Ok(session.with_codecs(codecs))
    },
};

const AUDIO_CODEC_STEP: PromptStep = PromptStep {
    label: "Audio codec",
    default: |session, _| session.codecs.audio.clone(),
    apply: |session, audio| {
        let codecs = CodecChoice::new(session.codecs.video.clone(), audio);
        Ok(session.with_codecs(codecs))
    },
};

const OUTPUT_FILENAME_STEP: PromptStep = PromptStep {
    label: "Output filename",
    default: |session, _| session.default_output_filename(),
    apply: |session, filename| Ok(session.with_output_filename(filename)),
};

const DESTINATION_STEP: PromptStep = PromptStep {
    label: "Download to",
    default: |_, context| context.default_destination.clone(),
    apply: |session, destination| Ok(session.with_destination(destination)),
};

const TRIM_FROM_LABEL: &str = "Input IN (HH:MM:SS)";
const TRIM_TO_LABEL: &str = "Input OUT (HH:MM:SS)";

/// Ordered stages for a request
pub fn plan_stages(request: &GrabRequest) -> Vec<Stage> {
    let mut stages = Vec::new();
    if request.source.is_none() {
        stages.push(Stage::Ask(SOURCE_STEP));
    }
    stages.push(Stage::Probe);
    stages.push(Stage::Ask(FORMAT_STEP));
    stages.push(Stage::ResolveLinks);
    if !request.skip_codecs {
        stages.push(Stage::Ask(VIDEO_CODEC_STEP));
        stages.push(Stage::Ask(AUDIO_CODEC_STEP));
    }
    stages.push(Stage::AskTrim);
    stages.push(Stage::Ask(OUTPUT_FILENAME_STEP));
    stages.push(Stage::Ask(DESTINATION_STEP));
    stages
}

/// Interactor for the grab use case
pub struct GrabInteractor {
    console_port: Arc<dyn ConsolePort>,
    process_port: Arc<dyn ProcessPort>,
    metadata: Arc<MetadataInteractor>,
    links: Arc<LinksInteractor>,
    mux_planner: MuxPlanner,
    context: StageContext,
}

impl GrabInteractor {
    /// Create new grab interactor with injected ports
    pub fn new(
        console_port: Arc<dyn ConsolePort>,
        process_port: Arc<dyn ProcessPort>,
        metadata: Arc<MetadataInteractor>,
        links: Arc<LinksInteractor>,
        mux_planner: MuxPlanner,
        context: StageContext,
    ) -> Self {
        Self {
            console_port,
            process_port,
            metadata,
            links,
            mux_planner,
            context,
        }
    }

    /// Run the whole pipeline
    pub async fn execute(&self, request: GrabRequest) -> GrabResult<GrabReport> {
        let mut session = match &request.source {
            Some(source) => Session::default().with_source(source.clone())?,
            None => Session::default(),
        };

        for stage in plan_stages(&request) {
            session = self.run_stage(stage, session).await?;
        }

        let invocation = self.mux_planner.synthesize(&MuxRequest {
            links: &session.links,
            trim: session.trim.as_ref(),
            codecs: &session.codecs,
            destination: &session.destination,
            output_filename: &session.output_filename,
        })?;
        let output_path = session.output_path();

        self.console_port.show(&format!("\n{}\n", invocation)).await?;

        if request.dry_run {
            info!("Dry run, not starting {}", self.mux_planner.program());
            return Ok(GrabReport {
                session,
                invocation,
                output_path,
                executed: false,
            });
        }

        let exit_code = self.process_port.forward(&invocation).await?;
        if exit_code != Some(0) {
            // A partially written output file is left for the operator
            warn!("Output may be incomplete: {}", output_path);
            return Err(GrabError::external(
                self.mux_planner.program(),
                describe_exit(exit_code),
            ));
        }

        info!("Saved {}", output_path);
        Ok(GrabReport {
            session,
            invocation,
            output_path,
            executed: true,
        })
    }

    async fn run_stage(&self, stage: Stage, session: Session) -> GrabResult<Session> {
        match stage {
            Stage::Ask(step) => {
                let default = (step.default)(&session, &self.context);
                let answer = self.console_port.ask(step.label, &default).await?;
                (step.apply)(session, answer)
            }
            Stage::AskTrim => self.ask_trim(session).await,
            Stage::Probe => {
                let metadata = self.metadata.resolve(&session.source).await?;
                self.show_metadata(&metadata).await?;
                Ok(session.with_metadata(metadata))
            }
            Stage::ResolveLinks => {
                let links = self
                    .links
                    .resolve_links(&session.source, &session.format)
                    .await?;
                self.show_links(&links).await?;
                Ok(session.with_links(links))
            }
        }
    }

    async fn ask_trim(&self, session: Session) -> GrabResult<Session> {
        let default_to = session.duration().to_string();
        let from = self
            .console_port
            .ask_optional(TRIM_FROM_LABEL, DEFAULT_TRIM_FROM)
            .await?;
        let to = self
            .console_port
            .ask_optional(TRIM_TO_LABEL, &default_to)
            .await?;

        let trim = match (from, to) {
            (None, None) => None,
            (from, to) => Some(TrimWindow::new(
                from.unwrap_or_else(|| DEFAULT_TRIM_FROM.to_string()),
                to.unwrap_or(default_to),
            )?),
        };
        Ok(session.with_trim(trim))
    }

    async fn show_metadata(&self, metadata: &Metadata) -> GrabResult<()> {
        let text = format!(
            "\nFORMATS:\n{}\n\nTitle: {}\nFull title: {}\nDuration: {}\n",
            metadata.formats_table, metadata.title, metadata.full_title, metadata.duration
        );
        self.console_port.show(&text).await
    }

    async fn show_links(&self, links: &[String]) -> GrabResult<()> {
        let mut text = String::from("\nDOWNLOAD LINKS:");
        for (index, link) in links.iter().enumerate() {
            text.push_str(&format!("\n[{}] {}", index + 1, link));
        }
        text.push('\n');
        self.console_port.show(&text).await
    }
}

#[cfg(test)]
mod tests;
