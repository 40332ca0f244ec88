use std::process::ExitCode;
use std::sync::Arc;

use carepath::api;
use carepath::config::{self, Config};
use carepath::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    carepath::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Open the store once before serving so a bad path fails here.
    let state = match AppState::new(config.database_path.clone()) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!(path = %config.database_path.display(), "Cannot open database: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut server = match api::start_server(state, config.bind_addr).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Cannot start server: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(addr = %server.addr, "Directory serving");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Signal handler error: {e}");
    }
    server.shutdown();

    ExitCode::SUCCESS
}
