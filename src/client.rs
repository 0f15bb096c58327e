//! Backend HTTP client.
//!
//! Every server-side call to the TutorLink backend goes through
//! [`ApiClient`]: it owns the base URL, forwards the caller's session
//! cookie, always sends `Content-Type: application/json`, and applies
//! connect/request timeouts so a hung backend cannot hang a page render
//! forever.
//!
//! Successful backend responses are wrapped in a `{ "data": T }` envelope.
//! The raw [`ApiClient::request`] surface deserializes the body exactly as
//! received, while the `*_data` helpers unwrap the envelope at the boundary
//! so call sites always work with the payload shape. Failures are collapsed
//! hard: any non-2xx status becomes [`ApiError::Upstream`] with no status or
//! body detail retained — callers cannot branch on cause, by contract.

use std::fmt;
use std::time::Duration;

use reqwest::Method;
use reqwest::header;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::backend::BackendConfig;

/// The `{ "data": T }` wrapper every successful backend response carries.
/// There is no error field in the success case; failures are signaled by
/// HTTP status alone.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Error surface of the backend client.
#[derive(Debug)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. Deliberately carries no
    /// status code or body: a 404 and a 500 are indistinguishable here.
    Upstream,
    /// The backend could not be reached or the connection failed mid-flight.
    Transport(reqwest::Error),
    /// A 2xx response body did not parse as the expected shape.
    Decode(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream => write!(f, "API error"),
            Self::Transport(err) => write!(f, "backend unreachable: {err}"),
            Self::Decode(err) => write!(f, "unexpected backend response: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Upstream => None,
            Self::Transport(err) | Self::Decode(err) => Some(err),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &BackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build backend HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The underlying client, for callers (the proxy route) that need to
    /// build requests the typed surface does not cover.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a request and deserialize a 2xx body as `T`, exactly as
    /// received — no envelope unwrapping happens here.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        cookie: Option<&str>,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("backend request: {} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        if !response.status().is_success() {
            return Err(ApiError::Upstream);
        }

        response.json::<T>().await.map_err(ApiError::Decode)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        cookie: Option<&str>,
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, cookie, None).await
    }

    /// GET and unwrap the `{ "data": T }` envelope.
    pub async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        cookie: Option<&str>,
    ) -> Result<T, ApiError> {
        let envelope: ApiEnvelope<T> = self.get(path, cookie).await?;
        Ok(envelope.data)
    }

    /// POST a JSON body and unwrap the `{ "data": T }` envelope.
    pub async fn post_data<T: DeserializeOwned>(
        &self,
        path: &str,
        cookie: Option<&str>,
        body: &Value,
    ) -> Result<T, ApiError> {
        let envelope: ApiEnvelope<T> = self
            .request(Method::POST, path, cookie, Some(body))
            .await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> BackendConfig {
        BackendConfig {
            base_url: base_url.to_string(),
            public_base_url: base_url.to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new(&config("http://localhost:8000/"));
        assert_eq!(
            client.url("/api/tutors"),
            "http://localhost:8000/api/tutors"
        );
    }

    #[test]
    fn envelope_deserializes_payload() {
        let envelope: ApiEnvelope<Value> =
            serde_json::from_str(r#"{"data":{"x":1}}"#).unwrap();
        assert_eq!(envelope.data, serde_json::json!({"x": 1}));
    }

    #[test]
    fn upstream_error_hides_cause() {
        assert_eq!(ApiError::Upstream.to_string(), "API error");
    }
}
