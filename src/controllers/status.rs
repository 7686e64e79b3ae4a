use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use log::info;

use crate::errors::DashboardError;
use crate::services::aggregator::get_status_data;
use crate::state::AppState;

// Status entries for every configured service
pub async fn get_status(data: web::Data<AppState>) -> Result<HttpResponse, DashboardError> {
    info!("Request for service status");
    let entries = get_status_data(data.monitor_source.as_ref(), &data.config.services).await;
    let body = serde_json::to_vec(&entries)?;
    info!("Returning status for {} services", entries.len());

    Ok(HttpResponse::Ok().content_type(ContentType::json()).body(body))
}
