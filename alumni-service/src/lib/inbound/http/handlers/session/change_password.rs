use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::session::ports::SessionServicePort;
use crate::user::models::Password;

pub async fn change_password(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let new_password = Password::new(body.new_password)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .sessions
        .change_password(&user.user_id, &body.old_password, new_password)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponse::new("Password changed successfully"),
    ))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    old_password: String,
    new_password: String,
}
