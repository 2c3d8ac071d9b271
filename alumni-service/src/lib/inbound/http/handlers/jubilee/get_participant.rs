use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ParticipantData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::jubilee::models::ParticipantId;
use crate::jubilee::ports::JubileeServicePort;

pub async fn get_participant(
    State(state): State<AppState>,
    Path(participant_id): Path<String>,
) -> Result<ApiSuccess<ParticipantData>, ApiError> {
    let participant_id = ParticipantId::from_string(&participant_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .jubilee
        .get(&participant_id)
        .await
        .map_err(ApiError::from)
        .map(|ref participant| ApiSuccess::new(StatusCode::OK, participant.into()))
}
