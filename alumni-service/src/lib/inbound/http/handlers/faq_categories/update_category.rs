use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::FaqCategoryData;
use crate::faq::models::FaqCategoryId;
use crate::faq::models::UpdateFaqCategoryCommand;
use crate::faq::ports::FaqServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<ApiSuccess<FaqCategoryData>, ApiError> {
    let category_id = FaqCategoryId::from_string(&category_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = UpdateFaqCategoryCommand {
        name: body.name,
        description: body.description,
    };

    state
        .faqs
        .update_category(&category_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}
