//! Uptime Status Dashboard
//!
//! Fetches monitor records from the UptimeRobot API, reduces each configured
//! service to an online/offline/error status with a 24h uptime figure, and
//! serves the result as JSON and as a rendered HTML page.

pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;

pub use config::Config;
pub use errors::{DashboardError, Result};
pub use services::uptime_robot::{MonitorSource, UptimeRobotClient};
pub use state::AppState;
