pub mod handlers;
pub mod types;

use crate::{Result, analysis::Analyzer, config::Config, llm::create_llm_client};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub const ANALYZE_PATH: &str = "/analyze-ingredients/";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(ANALYZE_PATH, post(handlers::analyze_ingredients))
        // Uploads are forwarded as-is; no size cap.
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = create_llm_client(config.llm.clone());
    let analyzer = Analyzer::new(client, &config.analysis);

    info!(
        provider = ?config.llm.provider,
        model = %config.llm.model,
        response_mode = ?analyzer.response_mode(),
        "Analyzer initialized"
    );

    let app = router(AppState {
        analyzer: Arc::new(analyzer),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
