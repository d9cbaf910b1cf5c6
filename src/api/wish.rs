use axum::{Extension, Json, Router, extract::Query, routing::get};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::AppState;
use crate::middleware::context::FarcasterContext;
use crate::models::wish::WishView;
use crate::services::wishes;
use crate::utils::error::AppResult;
use crate::utils::helpers::{parse_iso_date, today_utc};

#[derive(Deserialize)]
struct WishQuery {
    date: Option<String>,
}

async fn get_wish(
    Extension(context): Extension<FarcasterContext>,
    Query(query): Query<WishQuery>,
) -> AppResult<Json<WishView>> {
    let today = today_utc();
    let date = match query.date.as_deref() {
        Some(raw) if !raw.is_empty() => parse_iso_date(raw)?,
        _ => today,
    };

    let wish = wishes::wish_for(context.fid, date, today)?;

    Ok(Json(wish))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/wish", get(get_wish))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::models::wish::WishView;
    use crate::server::route_builder::build_router;
    use crate::utils::config::Config;
    use crate::utils::error::ErrorResponse;

    async fn call(uri: &str, fid: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().uri(uri);
        if let Some(fid) = fid {
            request = request.header("x-farcaster-fid", fid);
        }

        let response = build_router(Config::default())
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_wish_for_date() {
        let (status, body) = call("/api/wish?date=2024-01-01", Some("12345")).await;
        assert_eq!(status, StatusCode::OK);

        let wish: WishView = serde_json::from_slice(&body).unwrap();
        assert_eq!(wish.fid, 12345);
        assert_eq!(wish.index, 15);
        assert_eq!(wish.date, "2024-01-01");
        assert_eq!(wish.next_date, "2024-01-02");
        assert!(!wish.is_today);
    }

    #[tokio::test]
    async fn test_wish_same_day_is_stable() {
        let (_, first) = call("/api/wish?date=2024-06-01", Some("987")).await;
        let (_, second) = call("/api/wish?date=2024-06-01", Some("987")).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_wish_defaults_to_today() {
        let (status, body) = call("/api/wish", Some("12345")).await;
        assert_eq!(status, StatusCode::OK);

        let wish: WishView = serde_json::from_slice(&body).unwrap();
        assert!(wish.is_today);
    }

    #[tokio::test]
    async fn test_wish_fid_from_query() {
        let (status, body) = call("/api/wish?date=2024-01-02&fid=12345", None).await;
        assert_eq!(status, StatusCode::OK);

        let wish: WishView = serde_json::from_slice(&body).unwrap();
        assert_eq!(wish.index, 9);
    }

    #[tokio::test]
    async fn test_wish_requires_context() {
        let (status, body) = call("/api/wish?date=2024-01-01", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "auth_error");
    }

    #[tokio::test]
    async fn test_wish_rejects_bad_date() {
        let (status, body) = call("/api/wish?date=01/02/2024", Some("12345")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "bad_request");
    }
}
