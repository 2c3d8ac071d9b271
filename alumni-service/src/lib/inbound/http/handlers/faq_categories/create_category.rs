use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::FaqCategoryData;
use crate::faq::models::CreateFaqCategoryCommand;
use crate::faq::ports::FaqServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<ApiSuccess<FaqCategoryData>, ApiError> {
    let command = CreateFaqCategoryCommand {
        name: body.name,
        description: body.description,
    };

    state
        .faqs
        .create_category(command)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::CREATED, category.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
}
