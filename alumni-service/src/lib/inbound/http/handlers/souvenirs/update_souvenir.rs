use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::SouvenirData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::souvenir::models::SouvenirId;
use crate::souvenir::models::UpdateSouvenirCommand;
use crate::souvenir::ports::SouvenirServicePort;

pub async fn update_souvenir(
    State(state): State<AppState>,
    Path(souvenir_id): Path<String>,
    Json(body): Json<UpdateSouvenirRequest>,
) -> Result<ApiSuccess<SouvenirData>, ApiError> {
    let souvenir_id =
        SouvenirId::from_string(&souvenir_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = UpdateSouvenirCommand {
        name: body.name,
        batch: body.batch,
        group: body.group,
        phone_number: body.phone_number,
        email: body.email,
        photo_url: body.photo_url,
        photo_urls: body.photo_urls,
        content: body.content,
        professional_details: body.professional_details,
    };

    state
        .souvenirs
        .update_souvenir(&souvenir_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref souvenir| ApiSuccess::new(StatusCode::OK, souvenir.into()))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSouvenirRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    batch: Option<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    photo_urls: Option<Vec<String>>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    professional_details: Option<String>,
}
