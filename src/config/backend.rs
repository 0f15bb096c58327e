use std::env;

/// Backend connectivity configuration.
///
/// Two base URLs are kept deliberately distinct: `base_url` is what this
/// process uses for server-side calls (guards, proxy, view composition),
/// while `public_base_url` is the address handed to the browser in session
/// bootstrap data. In most deployments they differ (internal service DNS vs
/// public edge), and conflating them breaks one side or the other.
#[derive(Clone, Debug)]
pub struct BackendConfig {
    /// Server-side base URL (`BACKEND_BASE_URL`). Never exposed to clients.
    pub base_url: String,
    /// Client-exposed base URL (`PUBLIC_BACKEND_BASE_URL`).
    pub public_base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("BACKEND_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        Self {
            public_base_url: env::var("PUBLIC_BACKEND_BASE_URL")
                .unwrap_or_else(|_| base_url.clone()),
            base_url,
            connect_timeout_secs: env::var("BACKEND_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            request_timeout_secs: env::var("BACKEND_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}
