use actix_web::web::Bytes;
use log::{debug, error};
use reqwest::Client as HttpClient;
use reqwest::header;

use crate::errors::{DashboardError, Result};

/// Fetch the public status page body byte for byte. The upstream status code
/// is not inspected; only transport and body-read failures are errors.
pub async fn fetch_status_page(client: &HttpClient, url: &str, user_agent: &str) -> Result<Bytes> {
    debug!("Fetching public status page {}", url);

    let response = client
        .get(url)
        .header(header::USER_AGENT, user_agent)
        .send()
        .await
        .map_err(|e| {
            error!("Failed to fetch status page {}: {}", url, e);
            DashboardError::ProxyFetch(e.to_string())
        })?;

    response.bytes().await.map_err(|e| {
        error!("Failed to read status page body from {}: {}", url, e);
        DashboardError::ProxyFetch(e.to_string())
    })
}
