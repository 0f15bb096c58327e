use crate::client::ApiClient;
use crate::config::backend::BackendConfig;
use crate::config::routes::RouteRules;

/// Shared application state. Cloned per request; holds no mutable state —
/// cookie forwarding keeps every request self-contained.
#[derive(Clone, Debug)]
pub struct AppState {
    pub backend: BackendConfig,
    pub rules: RouteRules,
    pub client: ApiClient,
}

pub fn init_app_state() -> AppState {
    let backend = BackendConfig::from_env();
    let client = ApiClient::new(&backend);

    AppState {
        backend,
        rules: RouteRules::from_env(),
        client,
    }
}
