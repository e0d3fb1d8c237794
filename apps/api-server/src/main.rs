//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

mod config;
mod handlers;
mod middleware;
mod startup;
mod state;
mod telemetry;

use config::AppConfig;
use startup::{Application, StartupError};
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    let app = Application::build(config).await.inspect_err(|e| {
        tracing::error!("Startup failed: {}", e);
    })?;

    let handle = app.server_handle();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            handle.stop(true).await;
        }
    });

    tracing::info!("Your app is listening on port {}", app.port());
    app.run_until_stopped().await
}
