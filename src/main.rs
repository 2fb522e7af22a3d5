//! Tic Tac Toe server binary.

use tokio::sync::watch;

use tictactoe_backend::app::{
    init_tracing, with_http_layers, Application, Infrastructure, StartupError,
};
use tictactoe_backend::config::{AppConfig, ConfigError};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate().map_err(ConfigError::from)?;

    let app = Application::new(Infrastructure::from_config(&config).await?);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let jobs = if config.jobs.enabled {
        let scheduler = app.scheduler(&config.jobs);
        Some(tokio::spawn(async move { scheduler.run(shutdown_rx).await }))
    } else {
        tracing::info!("Background jobs disabled");
        None
    };

    let router = with_http_layers(app.router(), &config.server);
    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    if let Some(handle) = jobs {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Job scheduler task failed");
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
