use axum::Router;
use serde_json::{Value, json};

use tutorlink_web::client::ApiClient;
use tutorlink_web::config::backend::BackendConfig;
use tutorlink_web::config::routes::RouteRules;
use tutorlink_web::state::AppState;

/// Cookie header carrying the default session cookie. The gate only checks
/// presence, so the value is arbitrary.
#[allow(dead_code)]
pub const SESSION_COOKIE: &str = "better-auth.session_token=integration-test-session";

/// Serve a stub backend on an ephemeral port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Gateway state pointed at a stub backend, with default route rules.
pub fn test_state(backend_url: &str) -> AppState {
    let backend = BackendConfig {
        base_url: backend_url.to_string(),
        public_base_url: backend_url.to_string(),
        connect_timeout_secs: 5,
        request_timeout_secs: 30,
    };
    let client = ApiClient::new(&backend);

    AppState {
        backend,
        rules: RouteRules::default(),
        client,
    }
}

/// Identity payload in the shape `GET /api/auth/me` returns (pre-envelope).
#[allow(dead_code)]
pub fn identity_json(role: &str) -> Value {
    json!({
        "id": "usr_1",
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "role": role,
        "isBanned": false,
        "isActive": true,
        "createdAt": "2026-01-15T09:30:00Z"
    })
}
