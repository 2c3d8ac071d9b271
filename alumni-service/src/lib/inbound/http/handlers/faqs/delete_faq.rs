use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::faq::models::FaqId;
use crate::faq::ports::FaqServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::router::AppState;

pub async fn delete_faq(
    State(state): State<AppState>,
    Path(faq_id): Path<String>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let faq_id = FaqId::from_string(&faq_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.faqs.delete_faq(&faq_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponse::new("FAQ deleted successfully"),
    ))
}
