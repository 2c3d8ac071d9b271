use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::EventData;
use crate::event::models::EventId;
use crate::event::models::EventStatus;
use crate::event::models::EventVisibility;
use crate::event::models::PricingRange;
use crate::event::models::SocialMediaLinks;
use crate::event::models::UpdateEventCommand;
use crate::event::ports::EventServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<ApiSuccess<EventData>, ApiError> {
    let event_id =
        EventId::from_string(&event_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if matches!(body.seat_limit, Some(limit) if limit < 1) {
        return Err(ApiError::UnprocessableEntity(
            "Seat limit must be at least 1".to_string(),
        ));
    }

    state
        .events
        .update_event(&event_id, body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::new(StatusCode::OK, event.into()))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    short_description: Option<String>,
    #[serde(default)]
    full_description: Option<String>,
    #[serde(default)]
    banner_image: Option<String>,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
    #[serde(default)]
    starts_time: Option<String>,
    #[serde(default)]
    venue: Option<String>,
    #[serde(default)]
    google_map_link: Option<String>,
    #[serde(default)]
    organizer_name: Option<String>,
    #[serde(default)]
    organizer_contact_info: Option<String>,
    #[serde(default)]
    special_guests: Option<Vec<String>>,
    #[serde(default)]
    is_paid_event: Option<bool>,
    #[serde(default)]
    pricing_ranges: Option<Vec<PricingRange>>,
    #[serde(default)]
    seat_limit: Option<i32>,
    #[serde(default)]
    social_media_links: Option<SocialMediaLinks>,
    #[serde(default)]
    status: Option<EventStatus>,
    #[serde(default)]
    visibility: Option<EventVisibility>,
}

impl UpdateEventRequest {
    fn into_command(self) -> UpdateEventCommand {
        UpdateEventCommand {
            title: self.title,
            short_description: self.short_description,
            full_description: self.full_description,
            banner_image: self.banner_image,
            date: self.date,
            starts_time: self.starts_time,
            venue: self.venue,
            google_map_link: self.google_map_link,
            organizer_name: self.organizer_name,
            organizer_contact_info: self.organizer_contact_info,
            special_guests: self.special_guests,
            is_paid_event: self.is_paid_event,
            pricing_ranges: self.pricing_ranges,
            seat_limit: self.seat_limit,
            social_media_links: self.social_media_links,
            status: self.status,
            visibility: self.visibility,
        }
    }
}
