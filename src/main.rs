use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use scholarship_advisor::api::routes::{create_router, AppState};
use scholarship_advisor::config::Config;
use scholarship_advisor::observability::init_tracing;
use scholarship_advisor::policy::PolicyLoader;
use scholarship_advisor::rules::Evaluator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Initialize tracing
    init_tracing(&config.log_level, config.log_json);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting scholarship advisor"
    );

    // Load rules; a bad rule book must stop startup
    let loader = PolicyLoader::new(config.rules_path.clone());
    let store = match loader.load() {
        Ok(store) => store,
        Err(e) => {
            error!(source = %loader.source(), error = %e, "Invalid rule book");
            return Err(e.into());
        }
    };

    info!(
        source = %loader.source(),
        rules = store.len(),
        "Rule book loaded"
    );

    if config.check_rules {
        info!("Rule book is valid");
        return Ok(());
    }

    // Create application state
    let state = Arc::new(AppState::new(Evaluator::new(Arc::new(store))));

    // Create router
    let app = create_router(state);

    // Parse listen address
    let addr: SocketAddr = config.listen_addr.parse()?;

    info!(addr = %addr, "Starting HTTP server");

    // Create TCP listener
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server with graceful shutdown
    if config.graceful_shutdown {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
    } else {
        axum::serve(listener, app).await?;
    }

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}
