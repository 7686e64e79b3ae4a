use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::Result;
use crate::models::monitor::MonitorRecord;

// A named service on the dashboard and the upstream monitor that backs it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub name: String,
    pub monitor_id: String,
}

impl ServiceConfig {
    pub fn new(name: impl Into<String>, monitor_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            monitor_id: monitor_id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Online,
    Offline,
    Error,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Online => "online",
            ServiceStatus::Offline => "offline",
            ServiceStatus::Error => "error",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatusEntry {
    pub name: String,
    pub monitor_id: String,
    pub monitors: Vec<MonitorRecord>,
    pub status: ServiceStatus,
    pub last_updated: DateTime<Utc>,
    pub uptime_percentage: f64,
}

impl ServiceStatusEntry {
    /// Build the entry for one service from the outcome of its monitor lookup.
    ///
    /// Any failed lookup, not-found included, degrades to an `error` entry
    /// with zero uptime and no monitors. Only `ACTIVE` counts as online.
    pub fn from_lookup(
        service: &ServiceConfig,
        lookup: Result<MonitorRecord>,
        derived_at: DateTime<Utc>,
    ) -> Self {
        let (status, uptime_percentage, monitors) = match lookup {
            Ok(monitor) => {
                let status = if monitor.is_active() {
                    ServiceStatus::Online
                } else {
                    ServiceStatus::Offline
                };
                (status, monitor.uptime_percentage(), vec![monitor])
            }
            Err(_) => (ServiceStatus::Error, 0.0, Vec::new()),
        };

        Self {
            name: service.name.clone(),
            monitor_id: service.monitor_id.clone(),
            monitors,
            status,
            last_updated: derived_at,
            uptime_percentage,
        }
    }
}
