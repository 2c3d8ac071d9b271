use async_trait::async_trait;

use crate::event::errors::EventError;
use crate::event::models::CreateEventCommand;
use crate::event::models::Event;
use crate::event::models::EventId;
use crate::event::models::EventPage;
use crate::event::models::EventQuery;
use crate::event::models::UpdateEventCommand;
use crate::user::models::UserId;

/// Port for event domain operations.
#[async_trait]
pub trait EventServicePort: Send + Sync + 'static {
    /// Create a new event.
    ///
    /// # Errors
    /// * `PricingRequired` - paid event without pricing ranges
    async fn create_event(&self, command: CreateEventCommand) -> Result<Event, EventError>;

    /// Filtered, paginated listing.
    async fn list_events(&self, query: EventQuery) -> Result<EventPage, EventError>;

    /// Retrieve a single event.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    async fn get_event(&self, id: &EventId) -> Result<Event, EventError>;

    /// Update an event; only provided fields change.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    /// * `PricingRequired` - update would leave a paid event without pricing
    async fn update_event(
        &self,
        id: &EventId,
        command: UpdateEventCommand,
    ) -> Result<Event, EventError>;

    /// Delete an event.
    async fn delete_event(&self, id: &EventId) -> Result<(), EventError>;

    /// Register a user as attendee.
    ///
    /// # Errors
    /// * `AlreadyRegistered` - user already on the list
    /// * `FullyBooked` - seat limit reached
    async fn register_attendee(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Event, EventError>;

    /// Remove a user from the attendee list.
    ///
    /// # Errors
    /// * `NotRegistered` - user was not on the list
    async fn unregister_attendee(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Event, EventError>;
}

/// Persistence operations for events.
#[async_trait]
pub trait EventRepository: Send + Sync + 'static {
    async fn create(&self, event: Event) -> Result<Event, EventError>;

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventError>;

    /// Returns the matching page and the total match count.
    async fn list(&self, query: &EventQuery) -> Result<(Vec<Event>, i64), EventError>;

    async fn update(&self, event: Event) -> Result<Event, EventError>;

    async fn delete(&self, id: &EventId) -> Result<(), EventError>;
}
