use actix_web::http::header;
use actix_web::{web, HttpResponse};
use log::info;

use crate::errors::DashboardError;
use crate::services::proxy::fetch_status_page;
use crate::state::AppState;

// Relay the public status page so it can be framed by other sites
pub async fn proxy_status_page(data: web::Data<AppState>) -> Result<HttpResponse, DashboardError> {
    info!("Request to proxy public status page");
    let page = fetch_status_page(
        &data.http_client,
        &data.config.proxy_url,
        &data.config.proxy_user_agent,
    )
    .await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
        .insert_header((header::X_FRAME_OPTIONS, "ALLOWALL"))
        .body(page))
}
