mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

const DEFAULT_LOG_FILTER: &str = "school_api=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::router().with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    tracing::info!(
        "API documentation available at http://{}/swagger/",
        config.server_addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
