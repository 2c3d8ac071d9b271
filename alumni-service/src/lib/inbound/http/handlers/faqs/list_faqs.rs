use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::FaqData;
use crate::faq::models::FaqCategoryId;
use crate::faq::ports::FaqServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_faqs(
    State(state): State<AppState>,
    Query(params): Query<FaqListQuery>,
) -> Result<ApiSuccess<Vec<FaqData>>, ApiError> {
    let category_id = params
        .category_id
        .map(|id| FaqCategoryId::from_string(&id))
        .transpose()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .faqs
        .list_faqs(category_id)
        .await
        .map_err(ApiError::from)
        .map(|faqs| {
            let data: Vec<FaqData> = faqs.iter().map(FaqData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqListQuery {
    #[serde(default)]
    category_id: Option<String>,
}
