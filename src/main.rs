use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::{error, info, warn};

use uptime_status_dashboard::{routes, AppState, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting uptime status dashboard v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    for missing in config.missing_inputs() {
        warn!("{}", missing);
    }

    info!(
        "Dashboard configuration - Services: {}, API: {}, Proxy target: {}",
        config.services.len(),
        config.api_url,
        config.proxy_url
    );

    let bind = (config.host.clone(), config.port);
    let state = match AppState::new(config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Server is live at http://{}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
