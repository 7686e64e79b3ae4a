pub mod aggregator;
pub mod proxy;
pub mod uptime_robot;
