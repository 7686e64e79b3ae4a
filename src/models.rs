pub mod monitor;
pub mod status;

pub use monitor::{HistogramBucket, MonitorListResponse, MonitorRecord, UptimeWindow};
pub use status::{ServiceConfig, ServiceStatus, ServiceStatusEntry};
