use axum::extract::State;
use axum::http::StatusCode;

use super::UserData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<UserData>>, ApiError> {
    state
        .users
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            let data: Vec<UserData> = users.iter().map(UserData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
