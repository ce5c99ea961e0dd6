mod analysis;
mod config;
mod error;
mod routes;
mod upload;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use analysis::{AnalysisClient, DiagnosisService};
use config::ServerConfig;
use routes::{configure_routes, UploadLimits};
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let client = AnalysisClient::new(config.analysis_service_url.clone(), config.analysis_timeout)
        .map_err(|e| {
            log::error!("Failed to build analysis client: {}", e);
            std::io::Error::other(e.to_string())
        })?;
    let service: Arc<dyn DiagnosisService> = Arc::new(client);

    log::info!("Analysis service: {}", config.analysis_service_url);
    match config.analysis_timeout {
        Some(timeout) => log::info!("Upstream timeout: {}s", timeout.as_secs()),
        None => log::warn!("No upstream timeout configured; set ANALYSIS_TIMEOUT_SECS to bound requests"),
    }
    log::info!("Serving frontend from {}", config.frontend_dir.display());

    let bind_address = config.bind_address();
    let limits = UploadLimits {
        max_image_bytes: config.max_image_bytes,
    };
    let frontend_dir = config.frontend_dir.clone();

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::from(service.clone()))
            .app_data(web::Data::new(limits))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
