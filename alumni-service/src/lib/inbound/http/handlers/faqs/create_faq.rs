use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::FaqData;
use crate::faq::models::CreateFaqCommand;
use crate::faq::models::FaqCategoryId;
use crate::faq::ports::FaqServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_faq(
    State(state): State<AppState>,
    Json(body): Json<CreateFaqRequest>,
) -> Result<ApiSuccess<FaqData>, ApiError> {
    let category_id = FaqCategoryId::from_string(&body.category_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = CreateFaqCommand {
        question: body.question,
        answer: body.answer,
        category_id,
        display_order: body.order,
        show_home_page: body.show_home_page,
    };

    state
        .faqs
        .create_faq(command)
        .await
        .map_err(ApiError::from)
        .map(|ref faq| ApiSuccess::new(StatusCode::CREATED, faq.into()))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaqRequest {
    question: String,
    answer: String,
    category_id: String,
    #[serde(default)]
    order: Option<i32>,
    #[serde(default)]
    show_home_page: bool,
}
