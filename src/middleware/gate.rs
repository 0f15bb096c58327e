//! Coarse route gate.
//!
//! Gates whole path prefixes on session-cookie *presence*. This is not
//! authorization: the cookie is never validated, decoded, or checked for
//! expiry here. The gate exists to give visitors with no session at all a
//! fast redirect to `/login` without a backend round-trip; the section
//! guards in [`crate::middleware::section`] do the real check.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::config::routes::RouteRules;
use crate::metrics;
use crate::state::AppState;

/// Outcome of the gate for one request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    RedirectToLogin,
}

/// Pure decision function. `session_cookie` is the raw cookie value if the
/// session cookie was present on the request.
///
/// - Public prefixes allow unconditionally.
/// - Protected prefixes allow iff a non-empty cookie value is present.
/// - Everything else allows by default.
pub fn decide(rules: &RouteRules, path: &str, session_cookie: Option<&str>) -> GateDecision {
    if rules.is_public(path) {
        return GateDecision::Allow;
    }

    if rules.is_protected(path) {
        return match session_cookie {
            Some(value) if !value.is_empty() => GateDecision::Allow,
            _ => GateDecision::RedirectToLogin,
        };
    }

    GateDecision::Allow
}

/// Gate middleware, applied to the whole router.
pub async fn session_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    let cookie = jar
        .get(&state.rules.session_cookie)
        .map(|c| c.value().to_owned());

    match decide(&state.rules, &path, cookie.as_deref()) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::RedirectToLogin => {
            metrics::track_gate_redirect(&path);
            Redirect::to("/login").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_path_without_cookie_redirects() {
        let rules = RouteRules::default();
        assert_eq!(
            decide(&rules, "/dashboard", None),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn protected_path_with_any_cookie_value_allows() {
        // The gate does not validate content — any non-empty value passes.
        let rules = RouteRules::default();
        assert_eq!(
            decide(&rules, "/dashboard/bookings", Some("definitely-not-a-real-token")),
            GateDecision::Allow
        );
    }

    #[test]
    fn empty_cookie_value_counts_as_absent() {
        let rules = RouteRules::default();
        assert_eq!(
            decide(&rules, "/admin", Some("")),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn public_paths_allow_without_cookie() {
        let rules = RouteRules::default();
        assert_eq!(decide(&rules, "/", None), GateDecision::Allow);
        assert_eq!(decide(&rules, "/login", None), GateDecision::Allow);
        assert_eq!(decide(&rules, "/register/tutor", None), GateDecision::Allow);
    }

    #[test]
    fn unlisted_paths_allow_by_default() {
        let rules = RouteRules::default();
        assert_eq!(decide(&rules, "/views/tutors", None), GateDecision::Allow);
        assert_eq!(decide(&rules, "/api/tutors", None), GateDecision::Allow);
    }
}
