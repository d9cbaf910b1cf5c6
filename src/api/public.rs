use axum::{Json, Router, routing::get};
use std::sync::Arc;

use crate::api::AppState;
use crate::models::wish::WishCount;
use crate::services::wishes;

async fn health_check() -> &'static str {
    "OK"
}

async fn wish_count() -> Json<WishCount> {
    Json(WishCount {
        count: wishes::len(),
    })
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/wishes/count", get(wish_count))
}
