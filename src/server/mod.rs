pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{ErrorResponse, HealthResponse, ItemRequest, RootResponse, TsaResponse};

use crate::{Result, checker::ItemChecker, config::Config, llm::OpenRouterClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/check-item", post(handlers::check_item))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let api_key_configured = config.llm.api_key.is_some();

    let provider = OpenRouterClient::new(config.llm)?;
    let checker = ItemChecker::new(Arc::new(provider));

    let app_state = AppState {
        checker: Arc::new(checker),
        api_key_configured,
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
