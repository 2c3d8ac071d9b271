use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::EventData;
use crate::event::models::CreateEventCommand;
use crate::event::models::EventStatus;
use crate::event::models::EventVisibility;
use crate::event::models::PricingRange;
use crate::event::models::SocialMediaLinks;
use crate::event::ports::EventServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<CreateEventRequest>,
) -> Result<ApiSuccess<EventData>, ApiError> {
    if body.seat_limit < 1 {
        return Err(ApiError::UnprocessableEntity(
            "Seat limit must be at least 1".to_string(),
        ));
    }

    state
        .events
        .create_event(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::new(StatusCode::CREATED, event.into()))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    title: String,
    short_description: String,
    full_description: String,
    #[serde(default)]
    banner_image: Option<String>,
    date: DateTime<Utc>,
    starts_time: String,
    venue: String,
    #[serde(default)]
    google_map_link: Option<String>,
    organizer_name: String,
    organizer_contact_info: String,
    #[serde(default)]
    special_guests: Vec<String>,
    is_paid_event: bool,
    #[serde(default)]
    pricing_ranges: Vec<PricingRange>,
    seat_limit: i32,
    #[serde(default)]
    social_media_links: SocialMediaLinks,
    #[serde(default)]
    status: Option<EventStatus>,
    #[serde(default)]
    visibility: Option<EventVisibility>,
}

impl CreateEventRequest {
    fn into_command(self) -> CreateEventCommand {
        CreateEventCommand {
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
