use axum::extract::State;
use axum::http::StatusCode;

use super::RepresentativeData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::representative::ports::RepresentativeServicePort;

pub async fn list_representatives(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RepresentativeData>>, ApiError> {
    state
        .representatives
        .list_representatives()
        .await
        .map_err(ApiError::from)
        .map(|representatives| {
            let data: Vec<RepresentativeData> = representatives
                .iter()
                .map(RepresentativeData::from)
                .collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
