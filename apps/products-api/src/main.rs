//! Products API - REST server

use axum_helpers::server::{create_router, spawn_app};
use core_config::tracing::{init_tracing, install_color_eyre, install_panic_logger};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();
    install_panic_logger();

    // A missing .env file is fine; the real environment still applies.
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        "Connecting to PostgreSQL"
    );

    let db = connect_from_config_with_retry(config.postgres.clone(), None).await?;
    run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state), &state.config.server);

    info!(url = state.config.server.address(), "Starting Products API");

    // The listener runs on its own task; block here until it reports back.
    match spawn_app(router, &state.config.server).await {
        Ok(Ok(())) => info!("Products API shutdown complete"),
        Ok(Err(e)) => error!(error = %e, "Listener stopped"),
        Err(_) => error!("Listener task exited without reporting a result"),
    }

    state.db.close().await?;
    Ok(())
}
