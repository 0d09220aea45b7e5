//! Contacts backend server
//!
//! Binary name: `contacts-server`

use std::{future::IntoFuture, process};

use tokio::signal::unix::{signal, SignalKind};

use contacts::{Config, ContactDb, ContactService};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        tracing::error!("server failed: {err}");
        #[allow(clippy::exit)]
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let db = ContactDb::create_or_open(&config.db_path).await?;
    let service = ContactService::new(db);
    let app = contacts::http::router(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, db = %config.db_path.display(), "listening");

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    // Run the server until it fails or a shutdown signal arrives; an
    // aborted caller simply abandons its in-flight query.
    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        _ = sigint.recv() => {
            tracing::info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }

    Ok(())
}
