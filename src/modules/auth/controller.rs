use axum::{Json, extract::State};
use serde::Serialize;

use crate::middleware::section::CurrentUser;
use crate::modules::auth::model::UserIdentity;
use crate::state::AppState;

/// Session bootstrap data for the browser client. `api_base_url` is the
/// client-exposed backend address, distinct from the server-side one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub user: UserIdentity,
    pub api_base_url: String,
}

/// The identity the section guard already verified for this navigation.
/// No backend call here: the guard fetched it fresh on the way in.
pub async fn session_view(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<SessionView> {
    Json(SessionView {
        user,
        api_base_url: state.backend.public_base_url.clone(),
    })
}
