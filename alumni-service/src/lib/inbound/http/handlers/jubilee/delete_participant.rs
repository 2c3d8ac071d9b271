use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::router::AppState;
use crate::jubilee::models::ParticipantId;
use crate::jubilee::ports::JubileeServicePort;

pub async fn delete_participant(
    State(state): State<AppState>,
    Path(participant_id): Path<String>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let participant_id = ParticipantId::from_string(&participant_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.jubilee.delete(&participant_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponse::new("Participant deleted successfully"),
    ))
}
