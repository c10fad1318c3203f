use std::sync::Arc;

use movie_recommender::{
    api::{create_router, AppState},
    config::Config,
    services::HttpGateway,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let gateway = Arc::new(HttpGateway::new(config.api_base_url.clone()));
    let state = AppState::new(gateway);

    // Catalogs load in the background; the page renders empty selectors until then
    let controller = state.controller.clone();
    tokio::spawn(async move { controller.initialize().await });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        address = %config.bind_address(),
        backend = %config.api_base_url,
        "Movie recommender running"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
