//! Role-scoped section guards.
//!
//! Each guarded section (`/dashboard`, `/tutor`, `/admin`) wraps its routes
//! in [`require_role`]-based middleware. On every navigation the guard
//! forwards the request's cookies to the backend identity endpoint; there is
//! no identity caching across navigations, trading one round-trip per
//! request for freshness.
//!
//! The authentication check always resolves before the role check — the two
//! share one sequential await chain, so there is no race between them. Any
//! backend rejection (expired session, banned user, unreachable backend) is
//! treated as "not authenticated" and redirects to `/login`; a verified
//! identity with the wrong role redirects to `/unauthorized`. Only when
//! both checks pass does the request proceed, carrying the identity in its
//! extensions for handlers to pick up via [`CurrentUser`].

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use anyhow::anyhow;
use tracing::debug;

use crate::metrics;
use crate::modules::auth::model::{Role, UserIdentity};
use crate::modules::auth::service::SessionService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// The backend-verified identity of the caller, injected into request
/// extensions by the section guard. Handlers extract it directly.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserIdentity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                AppError::internal(anyhow!(
                    "identity missing from request extensions; handler mounted outside a section guard"
                ))
            })
    }
}

/// The request's raw `cookie` header, for handlers that call the backend on
/// the caller's behalf. Forwarded verbatim — the gateway never mints or
/// mutates session cookies.
#[derive(Debug, Clone, Default)]
pub struct ForwardedCookies(pub Option<String>);

impl<S> FromRequestParts<S> for ForwardedCookies
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(cookie_header(&parts.headers)))
    }
}

fn cookie_header(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Core guard: authenticate against the backend, then check the section's
/// required role. Failure is a redirect, never an error response.
pub async fn require_role(
    state: AppState,
    mut req: Request,
    next: Next,
    required: Role,
) -> Response {
    let cookies = cookie_header(req.headers());

    // Authentication first. Any failure — missing session, expired session,
    // banned account, unreachable backend — means "not authenticated" here.
    let identity = match SessionService::current_user(&state.client, cookies.as_deref()).await {
        Ok(identity) => identity,
        Err(err) => {
            debug!(section = required.as_str(), "identity check failed: {err}");
            metrics::track_identity_check("rejected");
            return Redirect::to("/login").into_response();
        }
    };

    // Role check only runs once authentication has resolved.
    if identity.role != required {
        debug!(
            section = required.as_str(),
            role = identity.role.as_str(),
            "role mismatch"
        );
        metrics::track_identity_check("wrong_role");
        return Redirect::to("/unauthorized").into_response();
    }

    metrics::track_identity_check("ok");
    req.extensions_mut().insert(CurrentUser(identity));
    next.run(req).await
}

/// Guard for the student dashboard section.
pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(state, req, next, Role::Student).await
}

/// Guard for the tutor section.
pub async fn require_tutor(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(state, req, next, Role::Tutor).await
}

/// Guard for the admin section.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(state, req, next, Role::Admin).await
}
