use askama::Template;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::models::monitor::MonitorRecord;
use crate::models::status::ServiceStatusEntry;
use crate::views::labels::{
    format_date, format_percentage, format_timestamp, monitor_status_label, status_color,
};

// Display-ready figures for a single upstream monitor
#[derive(Debug, Clone)]
pub struct MonitorCard {
    pub name: String,
    pub id: i64,
    pub url: String,
    pub badge: String,
    pub color: &'static str,
    pub uptime: String,
    pub status_code: String,
    pub created: String,
}

impl From<&MonitorRecord> for MonitorCard {
    fn from(monitor: &MonitorRecord) -> Self {
        let label = monitor_status_label(monitor.status.as_deref());

        Self {
            name: monitor.friendly_name.clone(),
            id: monitor.id,
            url: monitor.url.clone(),
            badge: label.to_uppercase(),
            color: status_color(label),
            uptime: format_percentage(monitor.uptime_percentage()),
            status_code: monitor
                .status
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            created: format_date(monitor.created_at()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceCard {
    pub name: String,
    pub last_updated: String,
    pub uptime: String,
    pub badge: String,
    pub color: &'static str,
    pub monitors: Vec<MonitorCard>,
}

impl From<&ServiceStatusEntry> for ServiceCard {
    fn from(entry: &ServiceStatusEntry) -> Self {
        Self {
            name: entry.name.clone(),
            last_updated: format_timestamp(&entry.last_updated),
            uptime: format_percentage(entry.uptime_percentage),
            badge: entry.status.as_str().to_uppercase(),
            color: status_color(entry.status.as_str()),
            monitors: entry.monitors.iter().map(MonitorCard::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub services: Vec<ServiceCard>,
    pub generated_at: String,
}

impl DashboardPage {
    pub fn new(entries: &[ServiceStatusEntry], generated_at: DateTime<Utc>) -> Self {
        Self {
            services: entries.iter().map(ServiceCard::from).collect(),
            generated_at: format_timestamp(&generated_at),
        }
    }
}

/// Render the full dashboard page for `entries`.
pub fn render_dashboard(entries: &[ServiceStatusEntry], generated_at: DateTime<Utc>) -> Result<String> {
    Ok(DashboardPage::new(entries, generated_at).render()?)
}
