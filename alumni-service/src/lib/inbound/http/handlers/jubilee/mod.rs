use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::jubilee::models::AmountType;
use crate::jubilee::models::BloodGroup;
use crate::jubilee::models::Gender;
use crate::jubilee::models::JubileeGroup;
use crate::jubilee::models::JubileeParticipant;
use crate::jubilee::models::ParticipantCategory;
use crate::jubilee::models::PaymentType;

pub mod by_batch_group;
pub mod delete_participant;
pub mod get_participant;
pub mod import_csv;
pub mod list_participants;
pub mod register_participant;
pub mod update_participant;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantData {
    pub id: String,
    pub participant_category: ParticipantCategory,
    pub secret_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsc_passing_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<JubileeGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
    pub payment_type: PaymentType,
    pub amount_type: AmountType,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_participant_batch: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_participant_group: Option<JubileeGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_participant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_participant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baby_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baby_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&JubileeParticipant> for ParticipantData {
    fn from(p: &JubileeParticipant) -> Self {
        Self {
            id: p.id.to_string(),
            participant_category: p.participant_category,
            secret_code: p.secret_code.clone(),
            full_name: p.full_name.clone(),
            phone_number: p.phone_number.clone(),
            alternative_phone_number: p.alternative_phone_number.clone(),
            email: p.email.clone(),
            hsc_passing_year: p.hsc_passing_year,
            group: p.group,
            gender: p.gender,
            blood_group: p.blood_group,
            payment_type: p.payment_type,
            amount_type: p.amount_type,
            amount: p.amount,
            comments: p.comments.clone(),
            father_name: p.father_name.clone(),
            father_phone_number: p.father_phone_number.clone(),
            father_occupation: p.father_occupation.clone(),
            mother_name: p.mother_name.clone(),
            mother_phone_number: p.mother_phone_number.clone(),
            mother_occupation: p.mother_occupation.clone(),
            main_participant_batch: p.main_participant_batch,
            main_participant_group: p.main_participant_group,
            main_participant_id: p.main_participant_id.map(|id| id.to_string()),
            main_participant_name: p.main_participant_name.clone(),
            guest_name: p.guest_name.clone(),
            guest_mobile_number: p.guest_mobile_number.clone(),
            baby_name: p.baby_name.clone(),
            baby_phone: p.baby_phone.clone(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
