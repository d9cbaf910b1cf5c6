pub mod page;
pub mod public;
pub mod wish;

use axum::Router;
use std::sync::Arc;

use crate::utils::config::Config;

pub struct AppState {
    pub config: Config,
}

pub fn routes(state: Arc<AppState>) -> Router {
    let context_routes = wish::routes().layer(axum::middleware::from_fn(
        crate::middleware::context::context_middleware,
    ));

    Router::new()
        .merge(public::routes())
        .merge(context_routes)
        .with_state(state)
}
