use std::sync::Arc;

use crate::adapters::{ConsoleAdapter, TokioProcessAdapter};
use crate::app::grab_interactor::StageContext;
use crate::app::{GrabInteractor, LinksInteractor, MetadataInteractor};
use crate::domain::model::AppConfig;
use crate::planner::{ExtractorPlanner, MuxPlanner};
use crate::ports::{ConsolePort, ProcessPort};

pub trait AppContainer: Send + Sync {
    fn metadata_interactor(&self) -> Arc<MetadataInteractor>;
    fn links_interactor(&self) -> Arc<LinksInteractor>;
    fn grab_interactor(&self) -> Arc<GrabInteractor>;
}

pub struct DefaultAppContainer {
    metadata_interactor: Arc<MetadataInteractor>,
    links_interactor: Arc<LinksInteractor>,
    grab_interactor: Arc<GrabInteractor>,
}

impl DefaultAppContainer {
    /// Wire the real process runner and the stdin/stdout console
    pub fn new(config: &AppConfig) -> Self {
        Self::with_ports(
            config,
            Arc::new(TokioProcessAdapter::new()),
            Arc::new(ConsoleAdapter::stdio()),
        )
    }

    pub fn with_ports(
        config: &AppConfig,
        process_port: Arc<dyn ProcessPort>,
        console_port: Arc<dyn ConsolePort>,
    ) -> Self {
        let extractor = ExtractorPlanner::new(&config.extractor);

        let metadata_interactor = Arc::new(MetadataInteractor::new(
            Arc::clone(&process_port),
            extractor.clone(),
        ));

        let links_interactor = Arc::new(LinksInteractor::new(
            Arc::clone(&process_port),
            extractor,
        ));

        let grab_interactor = Arc::new(GrabInteractor::new(
            console_port,
            process_port,
            Arc::clone(&metadata_interactor),
            Arc::clone(&links_interactor),
            MuxPlanner::new(&config.muxer),
            StageContext {
                default_destination: config.destination.clone(),
            },
        ));

        Self {
            metadata_interactor,
            links_interactor,
            grab_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn metadata_interactor(&self) -> Arc<MetadataInteractor> {
        Arc::clone(&self.metadata_interactor)
    }

    fn links_interactor(&self) -> Arc<LinksInteractor> {
        Arc::clone(&self.links_interactor)
    }

    fn grab_interactor(&self) -> Arc<GrabInteractor> {
        Arc::clone(&self.grab_interactor)
    }
}
