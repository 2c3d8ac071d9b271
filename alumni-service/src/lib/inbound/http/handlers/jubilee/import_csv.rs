use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::jubilee::models::CsvImportReport;
use crate::jubilee::ports::JubileeServicePort;

/// Bulk registration. The request body is the CSV document itself; rows
/// that fail are reported back with their line numbers, the rest are
/// registered normally.
pub async fn import_csv(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiSuccess<CsvImportReport>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("Empty CSV document".to_string()));
    }

    state
        .jubilee
        .import_csv(&body)
        .await
        .map_err(ApiError::from)
        .map(|report| ApiSuccess::new(StatusCode::CREATED, report))
}
