use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::souvenir::models::Souvenir;

pub mod create_souvenir;
pub mod delete_souvenir;
pub mod get_souvenir;
pub mod list_souvenirs;
pub mod update_souvenir;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SouvenirData {
    pub id: String,
    pub category: String,
    pub name: String,
    pub batch: String,
    pub group: String,
    pub phone_number: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub photo_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Souvenir> for SouvenirData {
    fn from(souvenir: &Souvenir) -> Self {
        Self {
            id: souvenir.id.to_string(),
            category: souvenir.category.clone(),
            name: souvenir.name.clone(),
            batch: souvenir.batch.clone(),
            group: souvenir.group.clone(),
            phone_number: souvenir.phone_number.clone(),
            email: souvenir.email.clone(),
            photo_url: souvenir.photo_url.clone(),
            photo_urls: souvenir.photo_urls.clone(),
            content: souvenir.content.clone(),
            professional_details: souvenir.professional_details.clone(),
            created_at: souvenir.created_at,
            updated_at: souvenir.updated_at,
        }
    }
}
