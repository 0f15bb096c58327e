use tracing::instrument;

use crate::client::{ApiClient, ApiError};
use crate::modules::auth::model::UserIdentity;

pub struct SessionService;

impl SessionService {
    /// Resolve the caller's identity by forwarding their cookies to the
    /// backend identity endpoint. The backend owns all trust decisions;
    /// this is a plain fetch with no caching.
    #[instrument(skip(client, cookies))]
    pub async fn current_user(
        client: &ApiClient,
        cookies: Option<&str>,
    ) -> Result<UserIdentity, ApiError> {
        client.get_data::<UserIdentity>("/api/auth/me", cookies).await
    }
}
