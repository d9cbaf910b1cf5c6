use axum::{
    extract::{Query, Request},
    http::{HeaderMap, Uri},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::utils::error::{AppError, AppResult};

pub const FID_HEADER: &str = "x-farcaster-fid";

#[derive(Deserialize)]
struct FidQuery {
    fid: Option<String>,
}

/// The Farcaster user a request was made on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarcasterContext {
    pub fid: i64,
}

/// Resolves the caller's FID, preferring the header the mini-app client sets
/// from the SDK context over a `fid` query parameter.
pub fn user_fid(headers: &HeaderMap, uri: &Uri) -> AppResult<i64> {
    let raw = match headers.get(FID_HEADER) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| AppError::Auth("Failed to load Farcaster context".to_string()))?
                .to_string(),
        ),
        None => fid_from_query(uri),
    };

    let raw = raw.ok_or_else(|| {
        AppError::Auth("Please open this app in a Farcaster client".to_string())
    })?;

    let fid = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::Auth("Failed to load Farcaster context".to_string()))?;

    if fid <= 0 {
        return Err(AppError::Auth(
            "Please open this app in a Farcaster client".to_string(),
        ));
    }

    Ok(fid)
}

fn fid_from_query(uri: &Uri) -> Option<String> {
    Query::<FidQuery>::try_from_uri(uri)
        .ok()
        .and_then(|Query(query)| query.fid)
}

pub async fn context_middleware(mut request: Request, next: Next) -> Result<Response, AppError> {
    let fid = user_fid(request.headers(), request.uri())?;

    tracing::debug!("Resolved Farcaster context for fid {}", fid);

    request.extensions_mut().insert(FarcasterContext { fid });

    Ok(next.run(request).await)
}
