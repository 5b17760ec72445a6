use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use wellmate::core::config::AppPaths;
use wellmate::core::logging;
use wellmate::server;
use wellmate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_path = dotenv::dotenv().ok();

    let paths = Arc::new(AppPaths::new());
    logging::init(&paths);
    if let Some(path) = dotenv_path {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let state = match AppState::initialize(paths).await {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("{}", err);
            return Err(err).context("Startup halted");
        }
    };

    let bind_addr = format!(
        "{}:{}",
        state.settings.server.host, state.settings.server.port
    );
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    let addr = listener.local_addr()?;

    tracing::info!(
        "{} listening on http://{} (index: {}, model: {})",
        state.settings.ui.title,
        addr,
        state.settings.vector_store.index_name,
        state.settings.llm.model
    );

    let app: Router = server::router::router(state);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
