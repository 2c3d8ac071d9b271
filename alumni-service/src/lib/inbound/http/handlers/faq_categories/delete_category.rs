use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::faq::models::FaqCategoryId;
use crate::faq::ports::FaqServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::router::AppState;

pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let category_id = FaqCategoryId::from_string(&category_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.faqs.delete_category(&category_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponse::new("Category deleted successfully"),
    ))
}
