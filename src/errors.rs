//! Error types for the status dashboard

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug)]
pub enum DashboardError {
    /// A required setting (API token, monitor id) is missing
    Configuration(String),

    /// The monitoring API answered with a non-success status or a malformed payload
    Upstream(String),

    /// No monitor matches the requested identifier
    NotFound(String),

    /// The public status page could not be fetched
    ProxyFetch(String),

    /// HTTP request failed
    Http(reqwest::Error),

    /// JSON serialization failed
    Json(serde_json::Error),

    /// Dashboard template failed to render
    Render(askama::Error),
}

impl DashboardError {
    /// Message exposed to HTTP clients. Internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            DashboardError::ProxyFetch(_) => "Failed to fetch stats",
            DashboardError::Render(_) => "Failed to render dashboard",
            _ => "Failed to fetch status data",
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            DashboardError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            DashboardError::NotFound(id) => write!(f, "Monitor not found: {}", id),
            DashboardError::ProxyFetch(msg) => write!(f, "Proxy fetch error: {}", msg),
            DashboardError::Http(err) => write!(f, "HTTP error: {}", err),
            DashboardError::Json(err) => write!(f, "JSON error: {}", err),
            DashboardError::Render(err) => write!(f, "Render error: {}", err),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Http(err) => Some(err),
            DashboardError::Json(err) => Some(err),
            DashboardError::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Json(err)
    }
}

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        DashboardError::Render(err)
    }
}

impl ResponseError for DashboardError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.public_message() }))
    }
}
