use tracing::instrument;

use crate::client::{ApiClient, ApiError};
use crate::modules::admin::model::Category;
use crate::modules::auth::model::UserIdentity;

pub struct AdminService;

impl AdminService {
    #[instrument(skip(client, cookies))]
    pub async fn list_categories(
        client: &ApiClient,
        cookies: Option<&str>,
    ) -> Result<Vec<Category>, ApiError> {
        client.get_data("/api/categories", cookies).await
    }

    #[instrument(skip(client, cookies))]
    pub async fn list_users(
        client: &ApiClient,
        cookies: Option<&str>,
    ) -> Result<Vec<UserIdentity>, ApiError> {
        client.get_data("/api/admin/users", cookies).await
    }
}
