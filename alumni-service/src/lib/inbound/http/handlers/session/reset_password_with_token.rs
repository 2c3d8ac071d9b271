use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::router::AppState;
use crate::session::ports::SessionServicePort;
use crate::user::models::Password;

pub async fn reset_password_with_token(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let new_password = Password::new(body.new_password)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .sessions
        .reset_password_with_token(&body.token, new_password)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponse::new(
            "Password has been reset successfully. Please login with your new password.",
        ),
    ))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    token: String,
    new_password: String,
}
