use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::{error, info};

use crate::errors::DashboardError;
use crate::services::aggregator::get_status_data;
use crate::state::AppState;
use crate::views::render_dashboard;

// Rendered dashboard page
pub async fn show_dashboard(data: web::Data<AppState>) -> Result<HttpResponse, DashboardError> {
    info!("Request for dashboard page");
    let entries = get_status_data(data.monitor_source.as_ref(), &data.config.services).await;
    let html = render_dashboard(&entries, Utc::now())
        .inspect_err(|e| error!("Failed to render dashboard: {}", e))?;

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json("OK")
}
