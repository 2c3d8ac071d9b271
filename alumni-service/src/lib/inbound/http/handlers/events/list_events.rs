use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::EventData;
use crate::event::models::EventQuery;
use crate::event::models::EventSortBy;
use crate::event::models::EventStatus;
use crate::event::models::EventVisibility;
use crate::event::models::SortOrder;
use crate::event::ports::EventServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventListQuery>,
) -> Result<ApiSuccess<EventListResponseData>, ApiError> {
    let page = state.events.list_events(params.into_query()).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        EventListResponseData {
            events: page.events.iter().map(EventData::from).collect(),
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages(),
        },
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListQuery {
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    status: Option<EventStatus>,
    #[serde(default)]
    visibility: Option<EventVisibility>,
    #[serde(default)]
    date_from: Option<DateTime<Utc>>,
    #[serde(default)]
    date_to: Option<DateTime<Utc>>,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    limit: Option<u32>,
    #[serde(default)]
    sort_by: Option<String>,
    #[serde(default)]
    sort_order: Option<String>,
}

impl EventListQuery {
    fn into_query(self) -> EventQuery {
        let sort_by = match self.sort_by.as_deref() {
            Some("createdAt") => EventSortBy::CreatedAt,
            Some("title") => EventSortBy::Title,
            _ => EventSortBy::Date,
        };
        let sort_order = match self.sort_order.as_deref() {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        };

        EventQuery {
            search: self.search,
            status: self.status,
            visibility: self.visibility,
            date_from: self.date_from,
            date_to: self.date_to,
            page: self.page.unwrap_or(1),
            limit: self.limit.unwrap_or(10),
            sort_by,
            sort_order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponseData {
    pub events: Vec<EventData>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}
