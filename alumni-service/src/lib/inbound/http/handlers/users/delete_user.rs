use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::router::AppState;
use crate::user::models::UserId;
use crate::user::ports::UserServicePort;

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.users.delete_user(&user_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponse::new("User deleted successfully"),
    ))
}
