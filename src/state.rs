use reqwest::Client as HttpClient;
use std::sync::Arc;

use crate::config::Config;
use crate::errors::Result;
use crate::services::uptime_robot::{MonitorSource, UptimeRobotClient};

// App state; read-only after startup
pub struct AppState {
    pub config: Config,
    pub http_client: HttpClient,
    pub monitor_source: Arc<dyn MonitorSource>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        let monitor_source = Arc::new(UptimeRobotClient::from_config(http_client.clone(), &config));

        Ok(Self::with_source(config, http_client, monitor_source))
    }

    pub fn with_source(
        config: Config,
        http_client: HttpClient,
        monitor_source: Arc<dyn MonitorSource>,
    ) -> Self {
        Self {
            config,
            http_client,
            monitor_source,
        }
    }
}
