use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::section::{CurrentUser, ForwardedCookies};
use crate::modules::admin::model::Category;
use crate::modules::admin::service::AdminService;
use crate::modules::auth::model::UserIdentity;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[instrument(skip_all)]
pub async fn list_categories(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    ForwardedCookies(cookies): ForwardedCookies,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = AdminService::list_categories(&state.client, cookies.as_deref())
        .await
        .map_err(AppError::bad_gateway)?;

    Ok(Json(categories))
}

#[instrument(skip_all)]
pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    ForwardedCookies(cookies): ForwardedCookies,
) -> Result<Json<Vec<UserIdentity>>, AppError> {
    let users = AdminService::list_users(&state.client, cookies.as_deref())
        .await
        .map_err(AppError::bad_gateway)?;

    Ok(Json(users))
}
