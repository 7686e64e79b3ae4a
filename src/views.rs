pub mod cards;
pub mod labels;

pub use cards::{render_dashboard, DashboardPage, MonitorCard, ServiceCard};
