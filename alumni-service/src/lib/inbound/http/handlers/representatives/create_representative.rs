use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::RepresentativeData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::representative::models::CreateRepresentativeCommand;
use crate::representative::ports::RepresentativeServicePort;

pub async fn create_representative(
    State(state): State<AppState>,
    Json(body): Json<CreateRepresentativeRequest>,
) -> Result<ApiSuccess<RepresentativeData>, ApiError> {
    let command = CreateRepresentativeCommand {
        name: body.name,
        phone: body.phone,
        facebook_url: body.facebook_url,
        comments: body.comments,
        hsc_year: body.hsc_year,
        hsc_group: body.hsc_group,
        gender: body.gender,
    };

    state
        .representatives
        .create_representative(command)
        .await
        .map_err(ApiError::from)
        .map(|ref representative| ApiSuccess::new(StatusCode::CREATED, representative.into()))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepresentativeRequest {
    name: String,
    phone: String,
    facebook_url: String,
    #[serde(default)]
    comments: Option<String>,
    hsc_year: i32,
    hsc_group: String,
    gender: String,
}
