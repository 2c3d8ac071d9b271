use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::representative::models::Representative;

pub mod create_representative;
pub mod delete_representative;
pub mod get_representative;
pub mod list_representatives;
pub mod update_representative;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentativeData {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub facebook_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub hsc_year: i32,
    pub hsc_group: String,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Representative> for RepresentativeData {
    fn from(representative: &Representative) -> Self {
        Self {
            id: representative.id.to_string(),
            name: representative.name.clone(),
            phone: representative.phone.clone(),
            facebook_url: representative.facebook_url.clone(),
            comments: representative.comments.clone(),
            hsc_year: representative.hsc_year,
            hsc_group: representative.hsc_group.clone(),
            gender: representative.gender.clone(),
            created_at: representative.created_at,
            updated_at: representative.updated_at,
        }
    }
}
