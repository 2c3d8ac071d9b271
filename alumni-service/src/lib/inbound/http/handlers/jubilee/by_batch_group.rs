use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ParticipantData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::jubilee::models::JubileeGroup;
use crate::jubilee::ports::JubileeServicePort;

pub async fn by_batch_group(
    State(state): State<AppState>,
    Query(params): Query<BatchGroupQuery>,
) -> Result<ApiSuccess<BatchGroupResponseData>, ApiError> {
    let group: JubileeGroup = params
        .group
        .parse()
        .map_err(|_| ApiError::UnprocessableEntity(format!("Unknown group: {}", params.group)))?;

    let listing = state.jubilee.list_by_batch_group(params.batch, group).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        BatchGroupResponseData {
            batch: listing.batch,
            group: listing.group,
            total: listing.total,
            participants: listing.participants.iter().map(ParticipantData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchGroupQuery {
    batch: i32,
    group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchGroupResponseData {
    pub batch: i32,
    pub group: JubileeGroup,
    pub total: usize,
    pub participants: Vec<ParticipantData>,
}
