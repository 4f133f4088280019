// Metadata interactor - Probes a source URL through the extractor

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::model::Metadata;
use crate::domain::rules::parse_metadata;
use crate::error::GrabResult;
use crate::planner::ExtractorPlanner;
use crate::ports::ProcessPort;

/// Interactor for the metadata probe
pub struct MetadataInteractor {
    process_port: Arc<dyn ProcessPort>,
    planner: ExtractorPlanner,
}

impl MetadataInteractor {
    /// Create new metadata interactor with injected ports
    pub fn new(process_port: Arc<dyn ProcessPort>, planner: ExtractorPlanner) -> Self {
        Self {
            process_port,
            planner,
        }
    }

    /// Probe `source` and return its normalized metadata
    pub async fn resolve(&self, source: &str) -> GrabResult<Metadata> {
        info!("Probing metadata for: {}", source);

        let invocation = self.planner.probe(source);
        let output = self.process_port.capture(&invocation).await?;
        output.ensure_success(self.planner.program())?;

        let metadata = parse_metadata(&output.stdout)?;
        if metadata.is_live {
            warn!(
                "Source is live ({}); duration defaults to {}",
                metadata.live_status, metadata.duration
            );
        }

        info!(title = %metadata.title, duration = %metadata.duration, "Metadata resolved");
        Ok(metadata)
    }
}
