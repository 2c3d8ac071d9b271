use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::faq::models::FaqCategory;

pub mod create_category;
pub mod delete_category;
pub mod list_categories;
pub mod update_category;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqCategoryData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&FaqCategory> for FaqCategoryData {
    fn from(category: &FaqCategory) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            description: category.description.clone(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
