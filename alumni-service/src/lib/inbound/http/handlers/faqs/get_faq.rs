use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::FaqData;
use crate::faq::models::FaqId;
use crate::faq::ports::FaqServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_faq(
    State(state): State<AppState>,
    Path(faq_id): Path<String>,
) -> Result<ApiSuccess<FaqData>, ApiError> {
    let faq_id = FaqId::from_string(&faq_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .faqs
        .get_faq(&faq_id)
        .await
        .map_err(ApiError::from)
        .map(|ref faq| ApiSuccess::new(StatusCode::OK, faq.into()))
}
