pub mod dashboard;
pub mod proxy;
pub mod status;
