//! Baler JSON API Server

use std::process::ExitCode;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};
use tracing::{error, info};

use baler::{PackCatalog, PackPlanner};

use crate::{config::ServerConfig, state::State};

mod config;
mod healthcheck;
mod observability;
mod orders;
mod shutdown;
mod state;

/// Baler JSON API Server entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(config_error) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                eprintln!("Configuration error: {config_error}");
            }

            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    if let Err(init_error) = observability::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "subscriber initialization failed, logging is unavailable"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        return ExitCode::FAILURE;
    }

    // Validate the pack catalog once; it is fixed for the process lifetime.
    let catalog = match PackCatalog::new(config.catalog.pack_sizes.iter().copied()) {
        Ok(catalog) => catalog,
        Err(catalog_error) => {
            error!("invalid pack catalog: {catalog_error}");

            return ExitCode::FAILURE;
        }
    };

    let planner = PackPlanner::new(catalog);

    let addr = config.socket_addr();

    info!(
        "starting server on {addr} with pack sizes {:?}",
        planner.catalog().sizes()
    );

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = app_router(State::new(planner));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(shutdown_error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {shutdown_error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    ExitCode::SUCCESS
}

fn app_router(state: State) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state.into_shared()))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("order/{item_count}").get(orders::get::handler))
}
