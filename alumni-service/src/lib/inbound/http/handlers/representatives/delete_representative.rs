use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::router::AppState;
use crate::representative::models::RepresentativeId;
use crate::representative::ports::RepresentativeServicePort;

pub async fn delete_representative(
    State(state): State<AppState>,
    Path(representative_id): Path<String>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let representative_id = RepresentativeId::from_string(&representative_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .representatives
        .delete_representative(&representative_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponse::new("Representative deleted successfully"),
    ))
}
