mod app;
mod handlers;
mod state;
mod storage;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, state::AppState, storage::StorageHandle};

/// Agenda - a small contact manager over HTTP
#[derive(Parser, Debug)]
#[command(name = "agenda")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3001", env = "PORT")]
    port: u16,

    /// Path to the SQLite database file
    #[arg(long, default_value = "data/agenda.db", env = "DB_PATH")]
    db_path: PathBuf,

    /// Use a transient in-memory database instead of the file at --db-path
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agenda=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let storage = open_storage(&cli).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to initialize database");
    })?;

    let state = AppState::with_sqlite(Arc::new(storage));

    // Build the application router
    let app = create_app(state);

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
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Open the database and make sure the contacts table exists.
async fn open_storage(cli: &Cli) -> Result<StorageHandle> {
    let storage = if cli.in_memory {
        tracing::warn!("Using in-memory database; data is lost on shutdown");
        StorageHandle::open_in_memory().await?
    } else {
        tracing::info!(path = %cli.db_path.display(), "Opening database");
        StorageHandle::open(&cli.db_path)
            .await
            .with_context(|| format!("Failed to open {}", cli.db_path.display()))?
    };

    storage
        .init_schema()
        .await
        .context("Failed to create contacts table")?;

    Ok(storage)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["agenda"]).unwrap();

        assert_eq!(cli.port, 3001);
        assert_eq!(cli.db_path, PathBuf::from("data/agenda.db"));
        assert!(!cli.in_memory);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "agenda",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--db-path",
            "/tmp/contacts.db",
            "--in-memory",
        ])
        .unwrap();

        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.db_path, PathBuf::from("/tmp/contacts.db"));
        assert!(cli.in_memory);
    }

    #[tokio::test]
    async fn test_open_storage_in_memory() {
        let cli = Cli::try_parse_from(["agenda", "--in-memory"]).unwrap();

        let storage = open_storage(&cli).await.unwrap();

        storage.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_open_storage_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("agenda.db");
        let cli = Cli::try_parse_from(["agenda", "--db-path", path.to_str().unwrap()]).unwrap();

        open_storage(&cli).await.unwrap();

        assert!(path.exists());
    }
}
