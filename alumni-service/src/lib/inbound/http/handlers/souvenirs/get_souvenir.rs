use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::SouvenirData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::souvenir::models::SouvenirId;
use crate::souvenir::ports::SouvenirServicePort;

pub async fn get_souvenir(
    State(state): State<AppState>,
    Path(souvenir_id): Path<String>,
) -> Result<ApiSuccess<SouvenirData>, ApiError> {
    let souvenir_id =
        SouvenirId::from_string(&souvenir_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .souvenirs
        .get_souvenir(&souvenir_id)
        .await
        .map_err(ApiError::from)
        .map(|ref souvenir| ApiSuccess::new(StatusCode::OK, souvenir.into()))
}
