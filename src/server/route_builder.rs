use axum::{
    Router,
    http::{HeaderValue, Uri, header},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api::{self, AppState};
use crate::utils::config::Config;
use crate::utils::error::AppError;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(config: Config) -> Router {
    let state = Arc::new(AppState { config });

    let api_routes = api::routes(state.clone());
    let page_routes = api::page::routes().with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .fallback(not_found)
        // Farcaster clients render the app inside a frame.
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("ALLOWALL"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub fn register_routes() -> anyhow::Result<(Router, Config)> {
    let config = Config::from_env()?;

    tracing::info!("Serving wishes for {}", config.public_url);
    tracing::info!("Loaded {} wishes", crate::services::wishes::len());

    Ok((build_router(config.clone()), config))
}
