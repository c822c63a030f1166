use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use log::info;

use pv_api::app::create_app;
use pv_api::config;
use pv_api::routes::AppState;
use pv_core::PhoneValidationService;
use pv_infra::PhoneNumberPlan;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = config::load()?;

    // Initialize logger
    config::init_logging(&config.logging);

    info!("Starting phone number validation server ({})", config.environment);

    // Numbering-plan metadata is loaded once here and shared read-only
    let plan = Arc::new(PhoneNumberPlan::new());
    let validation_service = Arc::new(PhoneValidationService::new(plan));
    let app_state = web::Data::new(AppState::new(validation_service));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    info!("Server stopped");
    Ok(())
}
