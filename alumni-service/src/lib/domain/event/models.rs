use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::event::errors::EventIdError;
use crate::user::errors::EnumParseError;
use crate::user::models::UserId;

/// Association event, free or paid, with bounded seating.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
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
    pub registered_users: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn registered_count(&self) -> usize {
        self.registered_users.len()
    }

    pub fn is_registered(&self, user_id: &UserId) -> bool {
        self.registered_users.contains(user_id)
    }

    pub fn is_fully_booked(&self) -> bool {
        self.registered_users.len() >= self.seat_limit as usize
    }
}

/// Event unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, EventIdError> {
        Uuid::parse_str(s)
            .map(EventId)
            .map_err(|e| EventIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-batch pricing tier for paid events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRange {
    pub batch_range: String,
    pub fee: f64,
    pub description: String,
    #[serde(default)]
    pub is_popular: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Ongoing => "Ongoing",
            EventStatus::Completed => "Completed",
        }
    }
}

impl FromStr for EventStatus {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Upcoming" => Ok(EventStatus::Upcoming),
            "Ongoing" => Ok(EventStatus::Ongoing),
            "Completed" => Ok(EventStatus::Completed),
            _ => Err(EnumParseError::unknown("event status", s)),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventVisibility {
    Public,
    Private,
    #[serde(rename = "Alumni-only")]
    AlumniOnly,
}

impl EventVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventVisibility::Public => "Public",
            EventVisibility::Private => "Private",
            EventVisibility::AlumniOnly => "Alumni-only",
        }
    }
}

impl FromStr for EventVisibility {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Public" => Ok(EventVisibility::Public),
            "Private" => Ok(EventVisibility::Private),
            "Alumni-only" => Ok(EventVisibility::AlumniOnly),
            _ => Err(EnumParseError::unknown("event visibility", s)),
        }
    }
}

impl fmt::Display for EventVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create a new event.
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
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
    pub status: Option<EventStatus>,
    pub visibility: Option<EventVisibility>,
}

/// Command to update an event; only provided fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventCommand {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub banner_image: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub starts_time: Option<String>,
    pub venue: Option<String>,
    pub google_map_link: Option<String>,
    pub organizer_name: Option<String>,
    pub organizer_contact_info: Option<String>,
    pub special_guests: Option<Vec<String>>,
    pub is_paid_event: Option<bool>,
    pub pricing_ranges: Option<Vec<PricingRange>>,
    pub seat_limit: Option<i32>,
    pub social_media_links: Option<SocialMediaLinks>,
    pub status: Option<EventStatus>,
    pub visibility: Option<EventVisibility>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSortBy {
    Date,
    CreatedAt,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Listing filter; paginated.
#[derive(Debug, Clone)]
pub struct EventQuery {
    pub search: Option<String>,
    pub status: Option<EventStatus>,
    pub visibility: Option<EventVisibility>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub page: u32,
    pub limit: u32,
    pub sort_by: EventSortBy,
    pub sort_order: SortOrder,
}

impl EventQuery {
    pub const MAX_LIMIT: u32 = 100;

    pub fn offset(&self) -> i64 {
        ((self.page - 1) * self.limit) as i64
    }
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            visibility: None,
            date_from: None,
            date_to: None,
            page: 1,
            limit: 10,
            sort_by: EventSortBy::Date,
            sort_order: SortOrder::Asc,
        }
    }
}

/// One page of events plus pagination metadata.
#[derive(Debug, Clone)]
pub struct EventPage {
    pub events: Vec<Event>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

impl EventPage {
    pub fn total_pages(&self) -> i64 {
        if self.limit == 0 {
            0
        } else {
            (self.total + self.limit as i64 - 1) / self.limit as i64
        }
    }
}
