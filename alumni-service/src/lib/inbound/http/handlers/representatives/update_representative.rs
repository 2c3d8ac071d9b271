use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::RepresentativeData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::representative::models::RepresentativeId;
use crate::representative::models::UpdateRepresentativeCommand;
use crate::representative::ports::RepresentativeServicePort;

pub async fn update_representative(
    State(state): State<AppState>,
    Path(representative_id): Path<String>,
    Json(body): Json<UpdateRepresentativeRequest>,
) -> Result<ApiSuccess<RepresentativeData>, ApiError> {
    let representative_id = RepresentativeId::from_string(&representative_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = UpdateRepresentativeCommand {
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
        .update_representative(&representative_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref representative| ApiSuccess::new(StatusCode::OK, representative.into()))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRepresentativeRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    facebook_url: Option<String>,
    #[serde(default)]
    comments: Option<String>,
    #[serde(default)]
    hsc_year: Option<i32>,
    #[serde(default)]
    hsc_group: Option<String>,
    #[serde(default)]
    gender: Option<String>,
}
