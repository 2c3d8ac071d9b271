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
use crate::jubilee::models::ParticipantCategory;
use crate::jubilee::models::ParticipantId;
use crate::jubilee::models::PaymentType;
use crate::jubilee::models::RegisterParticipantCommand;
use crate::jubilee::ports::JubileeServicePort;

pub async fn register_participant(
    State(state): State<AppState>,
    Json(body): Json<RegisterParticipantRequest>,
) -> Result<ApiSuccess<ParticipantData>, ApiError> {
    if body.amount < 0.0 {
        return Err(ApiError::UnprocessableEntity(
            "Amount must not be negative".to_string(),
        ));
    }

    let command = body.try_into_command()?;

    state
        .jubilee
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|ref participant| ApiSuccess::new(StatusCode::CREATED, participant.into()))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParticipantRequest {
    participant_category: ParticipantCategory,
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
    payment_type: PaymentType,
    amount_type: AmountType,
    amount: f64,
    #[serde(default)]
    comments: Option<String>,
    #[serde(default)]
    father_name: Option<String>,
    #[serde(default)]
    father_phone_number: Option<String>,
    #[serde(default)]
    father_occupation: Option<String>,
    #[serde(default)]
    mother_name: Option<String>,
    #[serde(default)]
    mother_phone_number: Option<String>,
    #[serde(default)]
    mother_occupation: Option<String>,
    #[serde(default)]
    main_participant_batch: Option<i32>,
    #[serde(default)]
    main_participant_group: Option<JubileeGroup>,
    #[serde(default)]
    main_participant_id: Option<String>,
    #[serde(default)]
    guest_name: Option<String>,
    #[serde(default)]
    guest_mobile_number: Option<String>,
    #[serde(default)]
    baby_name: Option<String>,
    #[serde(default)]
    baby_phone: Option<String>,
}

impl RegisterParticipantRequest {
    fn try_into_command(self) -> Result<RegisterParticipantCommand, ApiError> {
        let main_participant_id = self
            .main_participant_id
            .map(|id| ParticipantId::from_string(&id))
            .transpose()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(RegisterParticipantCommand {
            participant_category: self.participant_category,
            full_name: self.full_name,
            phone_number: self.phone_number,
            alternative_phone_number: self.alternative_phone_number,
            email: self.email,
            hsc_passing_year: self.hsc_passing_year,
            group: self.group,
            gender: self.gender,
            blood_group: self.blood_group,
            payment_type: self.payment_type,
            amount_type: self.amount_type,
            amount: self.amount,
            comments: self.comments,
            father_name: self.father_name,
            father_phone_number: self.father_phone_number,
            father_occupation: self.father_occupation,
            mother_name: self.mother_name,
            mother_phone_number: self.mother_phone_number,
            mother_occupation: self.mother_occupation,
            main_participant_batch: self.main_participant_batch,
            main_participant_group: self.main_participant_group,
            main_participant_id,
            guest_name: self.guest_name,
            guest_mobile_number: self.guest_mobile_number,
            baby_name: self.baby_name,
            baby_phone: self.baby_phone,
        })
    }
}
