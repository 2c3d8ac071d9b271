use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ParticipantData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::jubilee::models::AmountType;
use crate::jubilee::models::BloodGroup;
use crate::jubilee::models::Gender;
use crate::jubilee::models::JubileeGroup;
use crate::jubilee::models::ParticipantId;
use crate::jubilee::models::PaymentType;
use crate::jubilee::models::UpdateParticipantCommand;
use crate::jubilee::ports::JubileeServicePort;

pub async fn update_participant(
    State(state): State<AppState>,
    Path(participant_id): Path<String>,
    Json(body): Json<UpdateParticipantRequest>,
) -> Result<ApiSuccess<ParticipantData>, ApiError> {
    let participant_id = ParticipantId::from_string(&participant_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = UpdateParticipantCommand {
        full_name: body.full_name,
        phone_number: body.phone_number,
        alternative_phone_number: body.alternative_phone_number,
        email: body.email,
        hsc_passing_year: body.hsc_passing_year,
        group: body.group,
        gender: body.gender,
        blood_group: body.blood_group,
        payment_type: body.payment_type,
        amount_type: body.amount_type,
        amount: body.amount,
        comments: body.comments,
    };

    state
        .jubilee
        .update(&participant_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref participant| ApiSuccess::new(StatusCode::OK, participant.into()))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParticipantRequest {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    alternative_phone_number: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    hsc_passing_year: Option<i32>,
    #[serde(default)]
    group: Option<JubileeGroup>,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    blood_group: Option<BloodGroup>,
    #[serde(default)]
    payment_type: Option<PaymentType>,
    #[serde(default)]
    amount_type: Option<AmountType>,
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    comments: Option<String>,
}
