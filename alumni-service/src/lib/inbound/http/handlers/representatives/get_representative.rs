use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::RepresentativeData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::representative::models::RepresentativeId;
use crate::representative::ports::RepresentativeServicePort;

pub async fn get_representative(
    State(state): State<AppState>,
    Path(representative_id): Path<String>,
) -> Result<ApiSuccess<RepresentativeData>, ApiError> {
    let representative_id = RepresentativeId::from_string(&representative_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .representatives
        .get_representative(&representative_id)
        .await
        .map_err(ApiError::from)
        .map(|ref representative| ApiSuccess::new(StatusCode::OK, representative.into()))
}
