mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sdk = mfnav_sdk::AsyncMfnavSdk::builder().build().await?;
    tracing::info!("SDK ready");

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route("/api/search", get(routes::search::search_schemes))
        .route("/api/history", get(routes::history::get_history))
        .route("/download", get(routes::history::download_history))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("NAV_API_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
