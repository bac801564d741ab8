mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use shopfront_core::storage::ProductRepository;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{app::create_app, config::Config, state::AppState, storage::InMemoryRepository};

/// Set by the Lambda execution environment.
const LAMBDA_RUNTIME_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

/// Shopfront - product catalog API
#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to (ignored under Lambda)
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on (ignored under Lambda)
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend for products
    #[arg(long, value_enum, default_value_t = StorageBackend::Dynamodb, env = "STORAGE_BACKEND")]
    storage: StorageBackend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StorageBackend {
    /// DynamoDB table (requires the `dynamodb` feature)
    Dynamodb,
    /// Process-local map, lost on exit
    Memory,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let on_lambda = std::env::var_os(LAMBDA_RUNTIME_ENV).is_some();

    init_tracing(on_lambda);

    let config = Config::from_env();
    let product_repo = build_repository(cli.storage, &config).await?;
    let app = create_app(AppState::new(product_repo, &config));

    if on_lambda {
        tracing::info!(storage = ?cli.storage, "Starting Lambda runtime");
        return lambda_http::run(app)
            .await
            .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {e}"));
    }

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!(storage = ?cli.storage, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// Lambda ships stdout to CloudWatch, which timestamps each line and does not
/// render ANSI colors, so logs there are JSON without time or colors.
fn init_tracing(on_lambda: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if on_lambda {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_ansi(false)
                    .without_time(),
            )
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Build the product repository for the selected backend.
async fn build_repository(
    backend: StorageBackend,
    config: &Config,
) -> Result<Arc<dyn ProductRepository>> {
    match backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryRepository::new())),
        #[cfg(feature = "dynamodb")]
        StorageBackend::Dynamodb => Ok(Arc::new(
            storage::DynamoDbRepository::connect(config).await,
        )),
        #[cfg(not(feature = "dynamodb"))]
        StorageBackend::Dynamodb => {
            let _ = config;
            anyhow::bail!("DynamoDB storage requires building with the `dynamodb` feature")
        }
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
