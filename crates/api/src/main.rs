//! Routine Master - daily routine planner
//!
//! Main entry point for the web server.

use std::process::ExitCode;
use std::sync::Arc;

use routine_app::utils::logging::init_tracing;
use routine_app::{create_router, AppContext};
use routine_infra::config;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let config = match config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_tracing(&config.logging) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server terminated");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: routine_domain::Config) -> anyhow::Result<()> {
    let bind_address = config.server.bind_address.clone();
    let ctx = Arc::new(AppContext::new(config)?);
    let app = create_router(ctx);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Routine Master listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
