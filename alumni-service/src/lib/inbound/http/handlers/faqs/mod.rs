use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::faq::models::Faq;

pub mod create_faq;
pub mod delete_faq;
pub mod get_faq;
pub mod home_page_faqs;
pub mod list_faqs;
pub mod update_faq;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqData {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category_id: String,
    pub order: i32,
    pub show_home_page: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Faq> for FaqData {
    fn from(faq: &Faq) -> Self {
        Self {
            id: faq.id.to_string(),
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            category_id: faq.category_id.to_string(),
            order: faq.display_order,
            show_home_page: faq.show_home_page,
            created_at: faq.created_at,
            updated_at: faq.updated_at,
        }
    }
}
