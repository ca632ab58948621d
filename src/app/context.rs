use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::feed::FeedController;
use crate::transport::http_transport::HttpTransport;
use crate::transport::offline::OfflineTransport;
use crate::transport::ArticleTransport;

pub struct AppContext {
    pub config: Config,
    pub transport: Arc<dyn ArticleTransport + Send + Sync>,
    pub controller: Arc<FeedController>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let transport: Arc<dyn ArticleTransport + Send + Sync> = if config.api.offline {
            tracing::info!("Using built-in sample feed");
            Arc::new(OfflineTransport::new())
        } else {
            Arc::new(HttpTransport::new(&config.api)?)
        };
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: Config, transport: Arc<dyn ArticleTransport + Send + Sync>) -> Self {
        let controller = Arc::new(FeedController::new(transport.clone(), config.api.page_size));
        Self {
            config,
            transport,
            controller,
        }
    }

    pub fn offline() -> Self {
        let mut config = Config::default();
        config.api.offline = true;
        Self::with_transport(config, Arc::new(OfflineTransport::new()))
    }
}
