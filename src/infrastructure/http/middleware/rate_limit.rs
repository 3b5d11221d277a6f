use crate::infrastructure::http::middleware::{ApiError, AppState};
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

/// Reject requests from clients that have spent their quota
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&request, state.trust_forwarded_for);

    match state.rate_limiter.check(&client) {
        Ok(()) => next.run(request).await,
        Err(wait) => {
            let retry_after = wait.as_secs().max(1);
            tracing::warn!(
                "Rate limit exceeded for {} (retry after {}s)",
                client,
                retry_after
            );

            let mut response = ApiError::TooManyRequests(
                "Too many requests. Please try again later.".to_string(),
            )
            .into_response();
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
            response
        }
    }
}

/// Peer IP, or the first `X-Forwarded-For` hop when the proxy is trusted
fn client_key(request: &Request, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        let forwarded = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        if let Some(forwarded) = forwarded {
            return forwarded.to_string();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
