use actix_web::middleware::{self, Logger};
use actix_web::{web, App, HttpServer};
use color_eyre::Result;
use dotenvy::dotenv;
use eyre::WrapErr;
use log::info;
use std::{sync::Arc, time::Duration};

use solana_donate_action::{
    api::{middleware::cors_headers, routes},
    config::{DonateConfig, ServerConfig},
    constants::DEFAULT_SHUTDOWN_TIMEOUT_SECONDS,
    logging::setup_logging,
    models::AppState,
    services::{SolanaProvider, SolanaTransactionAssembler},
};

fn initialize_app_state(
    server_config: &ServerConfig,
    donate_config: DonateConfig,
) -> Result<web::Data<AppState>> {
    let provider = SolanaProvider::new(&server_config.rpc)
        .wrap_err("Failed to initialize Solana provider")?;
    let assembler = SolanaTransactionAssembler::new(
        Arc::new(provider),
        Duration::from_secs(server_config.rpc.timeout_seconds),
    );

    Ok(web::Data::new(AppState::new(
        donate_config,
        Arc::new(assembler),
    )))
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Load environment variables from .env file
    dotenv().ok();

    setup_logging()?;

    let server_config = ServerConfig::from_env().wrap_err("Invalid server configuration")?;
    let donate_config = DonateConfig::from_env().wrap_err("Invalid donate configuration")?;
    info!("RPC endpoint: {}", server_config.rpc.url);
    info!(
        "Donations go to {} via {}",
        donate_config.destination, donate_config.base_path
    );

    let base_path = donate_config.base_path.clone();
    let app_state = initialize_app_state(&server_config, donate_config)?;

    info!(
        "Starting server on {}:{}",
        server_config.host, server_config.port
    );
    let server = HttpServer::new(move || {
        let base_path = base_path.clone();
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(cors_headers())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(move |cfg| routes::configure_routes(cfg, &base_path))
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .shutdown_timeout(DEFAULT_SHUTDOWN_TIMEOUT_SECONDS);

    info!(
        "Server running at http://{}:{}",
        server_config.host, server_config.port
    );

    server.run().await?;
    Ok(())
}
