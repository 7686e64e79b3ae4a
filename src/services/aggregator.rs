use chrono::Utc;
use futures::future::join_all;
use log::{error, info};

use crate::errors::{DashboardError, Result};
use crate::models::monitor::MonitorRecord;
use crate::models::status::{ServiceConfig, ServiceStatusEntry};
use crate::services::uptime_robot::MonitorSource;

// Resolve every configured service into a status entry, in configuration order
pub async fn get_status_data(
    source: &dyn MonitorSource,
    services: &[ServiceConfig],
) -> Vec<ServiceStatusEntry> {
    info!("Resolving status for {} services", services.len());

    let lookups = join_all(services.iter().map(|service| resolve_service(source, service))).await;

    services
        .iter()
        .zip(lookups)
        .map(|(service, lookup)| ServiceStatusEntry::from_lookup(service, lookup, Utc::now()))
        .collect()
}

// Look up one service's monitor, folding "not found" into the error path
async fn resolve_service(source: &dyn MonitorSource, service: &ServiceConfig) -> Result<MonitorRecord> {
    let lookup = match source.find_monitor(&service.monitor_id).await {
        Ok(Some(monitor)) => Ok(monitor),
        Ok(None) => Err(DashboardError::NotFound(service.monitor_id.clone())),
        Err(e) => Err(e),
    };

    lookup.inspect_err(|e| error!("Error fetching status for {}: {}", service.name, e))
}
