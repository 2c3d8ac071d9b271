use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::event::models::EventId;
use crate::event::ports::EventServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::router::AppState;

pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let event_id =
        EventId::from_string(&event_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.events.delete_event(&event_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponse::new("Event deleted successfully"),
    ))
}
