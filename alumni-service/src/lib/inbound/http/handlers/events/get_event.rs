use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::EventData;
use crate::event::models::EventId;
use crate::event::ports::EventServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<ApiSuccess<EventData>, ApiError> {
    let event_id =
        EventId::from_string(&event_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .events
        .get_event(&event_id)
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::new(StatusCode::OK, event.into()))
}
