use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::FaqData;
use crate::faq::models::FaqCategoryId;
use crate::faq::models::FaqId;
use crate::faq::models::UpdateFaqCommand;
use crate::faq::ports::FaqServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_faq(
    State(state): State<AppState>,
    Path(faq_id): Path<String>,
    Json(body): Json<UpdateFaqRequest>,
) -> Result<ApiSuccess<FaqData>, ApiError> {
    let faq_id = FaqId::from_string(&faq_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let category_id = body
        .category_id
        .map(|id| FaqCategoryId::from_string(&id))
        .transpose()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = UpdateFaqCommand {
        question: body.question,
        answer: body.answer,
        category_id,
        display_order: body.order,
        show_home_page: body.show_home_page,
    };

    state
        .faqs
        .update_faq(&faq_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref faq| ApiSuccess::new(StatusCode::OK, faq.into()))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqRequest {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    category_id: Option<String>,
    #[serde(default)]
    order: Option<i32>,
    #[serde(default)]
    show_home_page: Option<bool>,
}
