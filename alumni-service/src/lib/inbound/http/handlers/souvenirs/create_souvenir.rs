use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::SouvenirData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::souvenir::models::CreateSouvenirCommand;
use crate::souvenir::ports::SouvenirServicePort;

pub async fn create_souvenir(
    State(state): State<AppState>,
    Json(body): Json<CreateSouvenirRequest>,
) -> Result<ApiSuccess<SouvenirData>, ApiError> {
    let command = CreateSouvenirCommand {
        category: body.category,
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
        .create_souvenir(command)
        .await
        .map_err(ApiError::from)
        .map(|ref souvenir| ApiSuccess::new(StatusCode::CREATED, souvenir.into()))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSouvenirRequest {
    category: String,
    name: String,
    batch: String,
    group: String,
    phone_number: String,
    email: String,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    photo_urls: Vec<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    professional_details: Option<String>,
}
