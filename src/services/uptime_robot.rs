//! Client for the UptimeRobot v3 monitors API

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::Client as HttpClient;
use reqwest::header;
use serde_json::Value;

use crate::config::Config;
use crate::errors::{DashboardError, Result};
use crate::models::monitor::{find_entry, MonitorListResponse, MonitorRecord};

/// Anything that can resolve a monitor identifier to a monitor record.
#[async_trait]
pub trait MonitorSource: Send + Sync {
    /// `Ok(None)` when no monitor matches `monitor_id`.
    async fn find_monitor(&self, monitor_id: &str) -> Result<Option<MonitorRecord>>;
}

#[derive(Debug, Clone)]
pub struct UptimeRobotClient {
    client: HttpClient,
    api_url: String,
    token: Option<String>,
}

impl UptimeRobotClient {
    pub fn new(client: HttpClient, api_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            token,
        }
    }

    pub fn from_config(client: HttpClient, config: &Config) -> Self {
        Self::new(client, config.api_url.clone(), config.api_token.clone())
    }

    /// Fetch every monitor visible to `token`, undecoded.
    async fn list_monitors(&self, token: &str) -> Result<Vec<Value>> {
        let response = self
            .client
            .get(&self.api_url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::Upstream(format!(
                "monitoring API returned {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let listing: MonitorListResponse = serde_json::from_str(&body)
            .map_err(|e| DashboardError::Upstream(format!("malformed monitor list: {}", e)))?;

        listing
            .data
            .ok_or_else(|| DashboardError::Upstream("Invalid API response".to_string()))
    }
}

#[async_trait]
impl MonitorSource for UptimeRobotClient {
    async fn find_monitor(&self, monitor_id: &str) -> Result<Option<MonitorRecord>> {
        let token = self
            .token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| DashboardError::Configuration("API token not configured".to_string()))?;

        let Ok(id) = monitor_id.trim().parse::<i64>() else {
            warn!("Monitor id '{}' is not numeric; treating as not found", monitor_id);
            return Ok(None);
        };

        let monitors = self.list_monitors(token).await.inspect_err(|e| {
            error!("Error fetching monitor {}: {}", monitor_id, e);
        })?;
        debug!("Monitoring API returned {} monitors", monitors.len());

        let Some(entry) = find_entry(monitors, id) else {
            return Ok(None);
        };

        serde_json::from_value(entry).map(Some).map_err(|e| {
            error!("Malformed record for monitor {}: {}", monitor_id, e);
            DashboardError::Upstream(format!("malformed record for monitor {}: {}", id, e))
        })
    }
}
