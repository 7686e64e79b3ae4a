use actix_web::web;

use crate::controllers::{dashboard, proxy, status};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard::show_dashboard))
        .route("/health", web::get().to(dashboard::health_check))
        .service(
            web::scope("/api")
                .route("/status", web::get().to(status::get_status))
                .route("/proxy", web::get().to(proxy::proxy_status_page)),
        );
}
