// Links interactor - Resolves direct media URLs for a format selector

use std::sync::Arc;

use tracing::info;

use crate::domain::rules::parse_links;
use crate::error::GrabResult;
use crate::planner::ExtractorPlanner;
use crate::ports::ProcessPort;

/// Interactor for stream link resolution
pub struct LinksInteractor {
    process_port: Arc<dyn ProcessPort>,
    planner: ExtractorPlanner,
}

impl LinksInteractor {
    /// Create new links interactor with injected ports
    pub fn new(process_port: Arc<dyn ProcessPort>, planner: ExtractorPlanner) -> Self {
        Self {
            process_port,
            planner,
        }
    }

    /// One direct URL per selected track, in extractor output order
    pub async fn resolve_links(&self, source: &str, selector: &str) -> GrabResult<Vec<String>> {
        info!("Resolving links for {} with format {}", source, selector);

        let invocation = self.planner.resolve(source, selector);
        let output = self.process_port.capture(&invocation).await?;
        output.ensure_success(self.planner.program())?;

        let links = parse_links(&output.stdout)?;
        info!("Resolved {} link(s)", links.len());
        Ok(links)
    }
}
