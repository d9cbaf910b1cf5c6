use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;

use crate::api::AppState;

const INDEX_TEMPLATE: &str = include_str!("../../static/index.html");
const ICON_SVG: &str = include_str!("../../static/icon.svg");

pub const APP_NAME: &str = "nice";
pub const APP_TITLE: &str = "nice - Your Daily Wish";
pub const APP_DESCRIPTION: &str = "Get your personalized daily wish on Farcaster";

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn render_index(public_url: &str) -> String {
    INDEX_TEMPLATE.replace("{{PUBLIC_URL}}", &escape_attribute(public_url))
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_index(&state.config.public_url))
}

async fn manifest(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let base = &state.config.public_url;

    Json(json!({
        "name": APP_NAME,
        "description": APP_DESCRIPTION,
        "icons": [{ "src": "/icon.svg", "type": "image/svg+xml" }],
        "frame": {
            "version": "1",
            "name": APP_NAME,
            "homeUrl": base,
            "iconUrl": format!("{}/icon.svg", base),
        }
    }))
}

async fn icon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], ICON_SVG)
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/manifest.json", get(manifest))
        .route("/icon.svg", get(icon))
}
