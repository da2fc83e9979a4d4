//! Client wrappers for the account endpoints. Both require the session token.

use crate::app_lib::api::{get_json_with_token, patch_json_with_token};
use carpool_ui::{
    endpoints,
    types::{DashboardResponse, UpdateProfileRequest},
    AppError, User,
};

pub async fn dashboard(token: &str) -> Result<DashboardResponse, AppError> {
    get_json_with_token(endpoints::DASHBOARD, token).await
}

pub async fn update_profile(token: &str, phone: String) -> Result<User, AppError> {
    patch_json_with_token(endpoints::PROFILE, &UpdateProfileRequest { phone }, token).await
}
