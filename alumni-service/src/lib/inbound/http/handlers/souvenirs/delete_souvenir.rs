use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::router::AppState;
use crate::souvenir::models::SouvenirId;
use crate::souvenir::ports::SouvenirServicePort;

pub async fn delete_souvenir(
    State(state): State<AppState>,
    Path(souvenir_id): Path<String>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let souvenir_id =
        SouvenirId::from_string(&souvenir_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.souvenirs.delete_souvenir(&souvenir_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponse::new("Souvenir deleted successfully"),
    ))
}
