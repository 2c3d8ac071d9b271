use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::event::errors::EventError;
use crate::event::models::CreateEventCommand;
use crate::event::models::Event;
use crate::event::models::EventId;
use crate::event::models::EventPage;
use crate::event::models::EventQuery;
use crate::event::models::EventStatus;
use crate::event::models::EventVisibility;
use crate::event::models::UpdateEventCommand;
use crate::event::ports::EventRepository;
use crate::event::ports::EventServicePort;
use crate::user::models::UserId;

/// Domain service for events.
pub struct EventService<ER>
where
    ER: EventRepository,
{
    repository: Arc<ER>,
}

impl<ER> EventService<ER>
where
    ER: EventRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> EventServicePort for EventService<ER>
where
    ER: EventRepository,
{
    async fn create_event(&self, command: CreateEventCommand) -> Result<Event, EventError> {
        if command.is_paid_event && command.pricing_ranges.is_empty() {
            return Err(EventError::PricingRequired);
        }

        let now = Utc::now();
        let event = Event {
            id: EventId::new(),
            title: command.title,
            short_description: command.short_description,
            full_description: command.full_description,
            banner_image: command.banner_image,
            date: command.date,
            starts_time: command.starts_time,
            venue: command.venue,
            google_map_link: command.google_map_link,
            organizer_name: command.organizer_name,
            organizer_contact_info: command.organizer_contact_info,
            special_guests: command.special_guests,
            is_paid_event: command.is_paid_event,
            pricing_ranges: command.pricing_ranges,
            seat_limit: command.seat_limit,
            social_media_links: command.social_media_links,
            status: command.status.unwrap_or(EventStatus::Upcoming),
            visibility: command.visibility.unwrap_or(EventVisibility::Public),
            registered_users: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.repository.create(event).await
    }

    async fn list_events(&self, query: EventQuery) -> Result<EventPage, EventError> {
        let (page, limit) = (query.page.max(1), query.limit.clamp(1, EventQuery::MAX_LIMIT));
        let query = EventQuery { page, limit, ..query };

        let (events, total) = self.repository.list(&query).await?;

        Ok(EventPage {
            events,
            total,
            page,
            limit,
        })
    }

    async fn get_event(&self, id: &EventId) -> Result<Event, EventError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id.to_string()))
    }

    async fn update_event(
        &self,
        id: &EventId,
        command: UpdateEventCommand,
    ) -> Result<Event, EventError> {
        let mut event = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id.to_string()))?;

        if let Some(title) = command.title {
            event.title = title;
        }
        if let Some(short_description) = command.short_description {
            event.short_description = short_description;
        }
        if let Some(full_description) = command.full_description {
            event.full_description = full_description;
        }
        if let Some(banner_image) = command.banner_image {
            event.banner_image = Some(banner_image);
        }
        if let Some(date) = command.date {
            event.date = date;
        }
        if let Some(starts_time) = command.starts_time {
            event.starts_time = starts_time;
        }
        if let Some(venue) = command.venue {
            event.venue = venue;
        }
        if let Some(google_map_link) = command.google_map_link {
            event.google_map_link = Some(google_map_link);
        }
        if let Some(organizer_name) = command.organizer_name {
            event.organizer_name = organizer_name;
        }
        if let Some(organizer_contact_info) = command.organizer_contact_info {
            event.organizer_contact_info = organizer_contact_info;
        }
        if let Some(special_guests) = command.special_guests {
            event.special_guests = special_guests;
        }
        if let Some(is_paid_event) = command.is_paid_event {
            event.is_paid_event = is_paid_event;
        }
        if let Some(pricing_ranges) = command.pricing_ranges {
            event.pricing_ranges = pricing_ranges;
        }
        if let Some(seat_limit) = command.seat_limit {
            event.seat_limit = seat_limit;
        }
        if let Some(social_media_links) = command.social_media_links {
            event.social_media_links = social_media_links;
        }
        if let Some(status) = command.status {
            event.status = status;
        }
        if let Some(visibility) = command.visibility {
            event.visibility = visibility;
        }

        if event.is_paid_event && event.pricing_ranges.is_empty() {
            return Err(EventError::PricingRequired);
        }

        event.updated_at = Utc::now();
        self.repository.update(event).await
    }

    async fn delete_event(&self, id: &EventId) -> Result<(), EventError> {
        self.repository.delete(id).await
    }

    async fn register_attendee(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Event, EventError> {
        let mut event = self
            .repository
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id.to_string()))?;

        if event.is_registered(user_id) {
            return Err(EventError::AlreadyRegistered);
        }
        if event.is_fully_booked() {
            return Err(EventError::FullyBooked);
        }

        event.registered_users.push(*user_id);
        event.updated_at = Utc::now();

        self.repository.update(event).await
    }

    async fn unregister_attendee(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Event, EventError> {
        let mut event = self
            .repository
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id.to_string()))?;

        if !event.is_registered(user_id) {
            return Err(EventError::NotRegistered);
        }

        event.registered_users.retain(|id| id != user_id);
        event.updated_at = Utc::now();

        self.repository.update(event).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::event::models::PricingRange;
    use crate::event::models::SocialMediaLinks;

    mock! {
        pub TestEventRepository {}

        #[async_trait]
        impl EventRepository for TestEventRepository {
            async fn create(&self, event: Event) -> Result<Event, EventError>;
            async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventError>;
            async fn list(&self, query: &EventQuery) -> Result<(Vec<Event>, i64), EventError>;
            async fn update(&self, event: Event) -> Result<Event, EventError>;
            async fn delete(&self, id: &EventId) -> Result<(), EventError>;
        }
    }

    fn create_command(is_paid: bool, pricing: Vec<PricingRange>) -> CreateEventCommand {
        CreateEventCommand {
            title: "Annual Reunion".to_string(),
            short_description: "Yearly get-together".to_string(),
            full_description: "The yearly alumni get-together.".to_string(),
            banner_image: None,
            date: Utc::now(),
            starts_time: "10:00 AM".to_string(),
            venue: "College Auditorium".to_string(),
            google_map_link: None,
            organizer_name: "Alumni Committee".to_string(),
            organizer_contact_info: "01712345678".to_string(),
            special_guests: vec![],
            is_paid_event: is_paid,
            pricing_ranges: pricing,
            seat_limit: 2,
            social_media_links: SocialMediaLinks::default(),
            status: None,
            visibility: None,
        }
    }

    fn test_event(seat_limit: i32, registered: Vec<UserId>) -> Event {
        Event {
            id: EventId::new(),
            title: "Annual Reunion".to_string(),
            short_description: "Yearly get-together".to_string(),
            full_description: "The yearly alumni get-together.".to_string(),
            banner_image: None,
            date: Utc::now(),
            starts_time: "10:00 AM".to_string(),
            venue: "College Auditorium".to_string(),
            google_map_link: None,
            organizer_name: "Alumni Committee".to_string(),
            organizer_contact_info: "01712345678".to_string(),
            special_guests: vec![],
            is_paid_event: false,
            pricing_ranges: vec![],
            seat_limit,
            social_media_links: SocialMediaLinks::default(),
            status: EventStatus::Upcoming,
            visibility: EventVisibility::Public,
            registered_users: registered,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_event_defaults_status_and_visibility() {
        let mut repository = MockTestEventRepository::new();
        repository
            .expect_create()
            .withf(|event| {
                event.status == EventStatus::Upcoming
                    && event.visibility == EventVisibility::Public
                    && event.registered_users.is_empty()
            })
            .times(1)
            .returning(|event| Ok(event));

        let service = EventService::new(Arc::new(repository));

        let event = service.create_event(create_command(false, vec![])).await.unwrap();
        assert_eq!(event.registered_count(), 0);
    }

    #[tokio::test]
    async fn test_create_paid_event_requires_pricing() {
        let mut repository = MockTestEventRepository::new();
        repository.expect_create().times(0);

        let service = EventService::new(Arc::new(repository));

        let result = service.create_event(create_command(true, vec![])).await;
        assert!(matches!(result.unwrap_err(), EventError::PricingRequired));
    }

    #[tokio::test]
    async fn test_update_cannot_strip_pricing_from_paid_event() {
        let mut repository = MockTestEventRepository::new();
        let mut event = test_event(10, vec![]);
        event.is_paid_event = true;
        event.pricing_ranges = vec![PricingRange {
            batch_range: "2000-2005".to_string(),
            fee: 500.0,
            description: "Early batches".to_string(),
            is_popular: false,
        }];

        let returned = event.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update().times(0);

        let service = EventService::new(Arc::new(repository));

        let command = UpdateEventCommand {
            pricing_ranges: Some(vec![]),
            ..Default::default()
        };

        let result = service.update_event(&event.id, command).await;
        assert!(matches!(result.unwrap_err(), EventError::PricingRequired));
    }

    #[tokio::test]
    async fn test_register_attendee_success() {
        let mut repository = MockTestEventRepository::new();
        let event = test_event(2, vec![]);
        let user_id = UserId::new();

        let returned = event.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository
            .expect_update()
            .withf(move |event| event.is_registered(&user_id))
            .times(1)
            .returning(|event| Ok(event));

        let service = EventService::new(Arc::new(repository));

        let updated = service.register_attendee(&event.id, &user_id).await.unwrap();
        assert_eq!(updated.registered_count(), 1);
    }

    #[tokio::test]
    async fn test_register_attendee_twice_rejected() {
        let mut repository = MockTestEventRepository::new();
        let user_id = UserId::new();
        let event = test_event(2, vec![user_id]);

        let returned = event.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update().times(0);

        let service = EventService::new(Arc::new(repository));

        let result = service.register_attendee(&event.id, &user_id).await;
        assert!(matches!(result.unwrap_err(), EventError::AlreadyRegistered));
    }

    #[tokio::test]
    async fn test_register_attendee_fully_booked() {
        let mut repository = MockTestEventRepository::new();
        let event = test_event(1, vec![UserId::new()]);

        let returned = event.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update().times(0);

        let service = EventService::new(Arc::new(repository));

        let result = service.register_attendee(&event.id, &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), EventError::FullyBooked));
    }

    #[tokio::test]
    async fn test_unregister_attendee_not_registered() {
        let mut repository = MockTestEventRepository::new();
        let event = test_event(2, vec![]);

        let returned = event.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update().times(0);

        let service = EventService::new(Arc::new(repository));

        let result = service.unregister_attendee(&event.id, &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), EventError::NotRegistered));
    }

    #[tokio::test]
    async fn test_list_events_clamps_limit() {
        let mut repository = MockTestEventRepository::new();
        repository
            .expect_list()
            .withf(|query| query.limit == EventQuery::MAX_LIMIT && query.page == 1)
            .times(1)
            .returning(|_| Ok((vec![], 0)));

        let service = EventService::new(Arc::new(repository));

        let page = service
            .list_events(EventQuery {
                page: 0,
                limit: 500,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total_pages(), 0);
    }
}
