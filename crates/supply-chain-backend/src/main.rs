//! Supply chain backend entry point.

use std::process::ExitCode;

use supply_chain_backend::config::Config;
use supply_chain_backend::telemetry;
use tokio::signal;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load configuration; the subscriber is not up yet, so report on stderr
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("supply-chain-backend: {err}");
            return ExitCode::FAILURE;
        }
    };

    // 2. Initialize tracing
    telemetry::init(&config);

    // 3. Bind and serve
    tracing::info!(addr = %config.addr(), "starting supply chain backend");
    if let Err(err) = supply_chain_backend::run(&config, shutdown_signal()).await {
        tracing::error!(error = %err, "supply chain backend failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("server shut down gracefully");
    ExitCode::SUCCESS
}
