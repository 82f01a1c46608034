use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::oneshot;
use tracing::{error, info};

use video_service::{
    routes, Config, GetVideo, HttpMetrics, InMemoryVideoRepository, UploadVideo, UuidGenerator,
    VideoHandler, VideoRepository,
};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    // Parse configuration
    let config = Config::parse();

    // Initialize logging
    let filter = if config.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    info!("Starting video-service v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    HttpMetrics::init()?;

    // Create infrastructure implementations (dependency injection)
    let repository: Arc<dyn VideoRepository> = Arc::new(InMemoryVideoRepository::new());
    let id_generator = Arc::new(UuidGenerator);

    // Create use cases
    let upload_video = UploadVideo::new(repository.clone(), id_generator);
    let get_video = GetVideo::new(repository);

    let handler = VideoHandler::new(upload_video, get_video);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let (addr, server) = warp::serve(routes(handler)).try_bind_with_graceful_shutdown(
        ([0, 0, 0, 0], config.http_port),
        async {
            shutdown_rx.await.ok();
        },
    )?;

    info!("HTTP server listening on http://{}", addr);
    let mut server_handle = tokio::spawn(server);

    shutdown_signal().await;
    let _ = shutdown_tx.send(());

    // Drain in-flight requests, then force-close
    let drain_window = config.shutdown_timeout();
    match tokio::time::timeout(drain_window, &mut server_handle).await {
        Ok(joined) => joined?,
        Err(_) => {
            server_handle.abort();
            error!(
                "In-flight requests did not finish within {:?}, connections closed",
                drain_window
            );
            anyhow::bail!("graceful shutdown timed out");
        }
    }

    info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutdown signal received (Ctrl+C)"),
        _ = terminate => info!("Shutdown signal received (SIGTERM)"),
    }
}
