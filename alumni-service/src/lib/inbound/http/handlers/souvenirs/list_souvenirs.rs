use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::SouvenirData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::souvenir::models::SouvenirQuery;
use crate::souvenir::models::SouvenirSortBy;
use crate::souvenir::ports::SouvenirServicePort;

pub async fn list_souvenirs(
    State(state): State<AppState>,
    Query(params): Query<SouvenirListQuery>,
) -> Result<ApiSuccess<SouvenirListResponseData>, ApiError> {
    let (souvenirs, total) = state.souvenirs.list_souvenirs(params.into_query()).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SouvenirListResponseData {
            souvenirs: souvenirs.iter().map(SouvenirData::from).collect(),
            total,
        },
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SouvenirListQuery {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    batch: Option<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    sort_by: Option<String>,
    #[serde(default)]
    sort_order: Option<String>,
}

impl SouvenirListQuery {
    fn into_query(self) -> SouvenirQuery {
        let sort_by = match self.sort_by.as_deref() {
            Some("name") => Some(SouvenirSortBy::Name),
            Some("batch") => Some(SouvenirSortBy::Batch),
            Some("createdAt") => Some(SouvenirSortBy::CreatedAt),
            _ => None,
        };
        // Newest first unless explicitly asked ascending.
        let descending = self.sort_order.as_deref() != Some("asc");

        SouvenirQuery {
            category: self.category,
            batch: self.batch,
            group: self.group,
            search: self.search,
            sort_by,
            descending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SouvenirListResponseData {
    pub souvenirs: Vec<SouvenirData>,
    pub total: i64,
}
