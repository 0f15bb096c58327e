//! Transparent `/api/*` passthrough.
//!
//! Lets the browser client reach the backend same-origin: the method, the
//! `cookie` header, and the raw body text are forwarded as-is, and the
//! backend's status code and body come back verbatim — the gateway never
//! re-parses or re-wraps what flows through here.
//!
//! Two documented simplifications are preserved from the original contract:
//! the outbound `Content-Type` is always `application/json` regardless of
//! what the client sent (multipart payloads would break silently), and an
//! unreachable backend falls through to the service's generic error
//! response rather than any bespoke handling.

use anyhow::anyhow;
use axum::{
    body::{Body, to_bytes},
    extract::{Path, Request, State},
    http::{Method, Response, header, header::HeaderValue},
};
use tracing::instrument;

use crate::metrics;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Upper bound on a proxied request body. Large uploads belong on a direct
/// backend route, not the passthrough.
const PROXY_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[instrument(skip(state, req), fields(path = %path))]
pub async fn forward_api(
    State(state): State<AppState>,
    Path(path): Path<String>,
    req: Request,
) -> Result<Response<Body>, AppError> {
    let method = req.method().clone();
    let query = req.uri().query().map(str::to_owned);
    let cookie = req.headers().get(header::COOKIE).cloned();

    let body = to_bytes(req.into_body(), PROXY_BODY_LIMIT)
        .await
        .map_err(|err| AppError::bad_request(anyhow!("unreadable request body: {err}")))?;

    let mut url = format!("{}/api/{}", state.client.url(""), path);
    if let Some(q) = query {
        url = format!("{url}?{q}");
    }

    let mut outbound = state
        .client
        .http()
        .request(method.clone(), &url)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        outbound = outbound.header(header::COOKIE, cookie);
    }
    // GET forwards no body; every other method forwards the raw text.
    if method != Method::GET {
        outbound = outbound.body(body.to_vec());
    }

    let upstream = outbound
        .send()
        .await
        .map_err(|err| AppError::bad_gateway(anyhow!("backend unreachable: {err}")))?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let text = upstream
        .text()
        .await
        .map_err(|err| AppError::bad_gateway(anyhow!("backend response unreadable: {err}")))?;

    metrics::track_proxy_forward(method.as_str(), status.as_u16());

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(text))
        .map_err(AppError::internal)
}
