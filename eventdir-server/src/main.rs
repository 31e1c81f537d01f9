mod app;
mod routes;
mod state;

use anyhow::Result;
use eventdir_core::EventDir;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let eventdir = EventDir::load()?;

    // Ensure only one process writes this data directory
    let _lock = eventdir.lock()?;
    eventdir.init().await?;

    let addr = format!("{}:{}", eventdir.config().host, eventdir.config().port);
    tracing::info!(
        data_dir = %eventdir.data_path().display(),
        public_dir = %eventdir.public_path().display(),
        "eventdir-server listening on http://{}",
        addr
    );

    let app = app::router(AppState::new(eventdir));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
