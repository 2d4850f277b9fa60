use crate::config::AppConfig;
use crate::router::handle;
use crate::state::{AppState, LiveServices};
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod agent;
mod config;
mod domain;
mod errors;
mod extraction;
mod forms;
mod geocode;
mod parser;
mod responses;
mod router;
mod session;
mod spreadsheets;
mod state;
mod storage;
mod summarize;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,realty_scout=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2️⃣ Configuration (.env, then the environment)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // 3️⃣ Remote-service clients and shared state
    let services = match LiveServices::new(&config) {
        Ok(services) => services,
        Err(e) => {
            error!(error = %e, "Could not build HTTP clients");
            std::process::exit(1);
        }
    };
    let addr = config.bind_addr;
    let workers = config.max_workers;
    let state = AppState::new(config, Box::new(services));

    info!(
        %addr,
        workers,
        saved_searches = %state.saved_searches.path().display(),
        "Starting server at http://{addr}"
    );

    // 4️⃣ Serve requests, each on a pool worker
    let result = Server::bind(&addr)
        .max_workers(workers)
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => templates::html_error_response(err),
        });

    if let Err(e) = result {
        error!(error = %e, "Server ended with error");
    }

    info!("Server shut down cleanly.");
}
