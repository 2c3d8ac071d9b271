use axum::extract::State;
use axum::http::StatusCode;

use super::FaqCategoryData;
use crate::faq::ports::FaqServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<FaqCategoryData>>, ApiError> {
    state
        .faqs
        .list_categories()
        .await
        .map_err(ApiError::from)
        .map(|categories| {
            let data: Vec<FaqCategoryData> =
                categories.iter().map(FaqCategoryData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
