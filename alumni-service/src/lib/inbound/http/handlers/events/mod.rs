use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::event::models::Event;
use crate::event::models::EventStatus;
use crate::event::models::EventVisibility;
use crate::event::models::PricingRange;
use crate::event::models::SocialMediaLinks;

pub mod create_event;
pub mod delete_event;
pub mod get_event;
pub mod list_events;
pub mod register_attendee;
pub mod unregister_attendee;
pub mod update_event;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub banner_image: Option<String>,
    pub date: DateTime<Utc>,
    pub starts_time: String,
    pub venue: String,
    pub google_map_link: Option<String>,
    pub organizer_name: String,
    pub organizer_contact_info: String,
    pub special_guests: Vec<String>,
    pub is_paid_event: bool,
    pub pricing_ranges: Vec<PricingRange>,
    pub seat_limit: i32,
    pub social_media_links: SocialMediaLinks,
    pub status: EventStatus,
    pub visibility: EventVisibility,
    pub registered_count: usize,
    pub registered_users: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Event> for EventData {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.clone(),
            short_description: event.short_description.clone(),
            full_description: event.full_description.clone(),
            banner_image: event.banner_image.clone(),
            date: event.date,
            starts_time: event.starts_time.clone(),
            venue: event.venue.clone(),
            google_map_link: event.google_map_link.clone(),
            organizer_name: event.organizer_name.clone(),
            organizer_contact_info: event.organizer_contact_info.clone(),
            special_guests: event.special_guests.clone(),
            is_paid_event: event.is_paid_event,
            pricing_ranges: event.pricing_ranges.clone(),
            seat_limit: event.seat_limit,
            social_media_links: event.social_media_links.clone(),
            status: event.status,
            visibility: event.visibility,
            registered_count: event.registered_count(),
            registered_users: event.registered_users.iter().map(|id| id.to_string()).collect(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}
