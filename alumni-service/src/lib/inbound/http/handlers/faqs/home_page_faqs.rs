use axum::extract::State;
use axum::http::StatusCode;

use super::FaqData;
use crate::faq::ports::FaqServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn home_page_faqs(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<FaqData>>, ApiError> {
    state
        .faqs
        .home_page_faqs()
        .await
        .map_err(ApiError::from)
        .map(|faqs| {
            let data: Vec<FaqData> = faqs.iter().map(FaqData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
