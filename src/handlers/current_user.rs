use axum::{Extension, Json};
use serde::Serialize;

use crate::auth::Caller;
use crate::error::{ApiError, ApiResult};
use crate::types::Role;

#[derive(Debug, Serialize)]
pub struct CurrentUser {
    pub email: String,
    pub roles: Vec<Role>,
    pub admin: bool,
}

/// GET /api/currentUser
pub async fn current_user(Extension(caller): Extension<Caller>) -> ApiResult<Json<CurrentUser>> {
    if !caller.is_authenticated() {
        return Err(ApiError::forbidden("Access is denied"));
    }

    let admin = caller.has_role(Role::Admin);
    Ok(Json(CurrentUser {
        email: caller.email.unwrap_or_default(),
        roles: caller.roles.into_iter().collect(),
        admin,
    }))
}
