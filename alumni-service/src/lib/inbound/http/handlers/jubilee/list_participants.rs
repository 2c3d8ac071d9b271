use axum::extract::State;
use axum::http::StatusCode;

use super::ParticipantData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::jubilee::ports::JubileeServicePort;

pub async fn list_participants(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ParticipantData>>, ApiError> {
    state
        .jubilee
        .list()
        .await
        .map_err(ApiError::from)
        .map(|participants| {
            let data: Vec<ParticipantData> =
                participants.iter().map(ParticipantData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
