use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;
use uuid::Uuid;

use crate::event::errors::EventError;
use crate::event::models::Event;
use crate::event::models::EventId;
use crate::event::models::EventQuery;
use crate::event::models::EventSortBy;
use crate::event::models::PricingRange;
use crate::event::models::SocialMediaLinks;
use crate::event::models::SortOrder;
use crate::event::ports::EventRepository;
use crate::user::models::UserId;

pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    short_description: String,
    full_description: String,
    banner_image: Option<String>,
    date: DateTime<Utc>,
    starts_time: String,
    venue: String,
    google_map_link: Option<String>,
    organizer_name: String,
    organizer_contact_info: String,
    special_guests: Vec<String>,
    is_paid_event: bool,
    pricing_ranges: Json<Vec<PricingRange>>,
    seat_limit: i32,
    social_media_links: Json<SocialMediaLinks>,
    status: String,
    visibility: String,
    registered_users: Vec<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = EventError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            id: EventId(row.id),
            title: row.title,
            short_description: row.short_description,
            full_description: row.full_description,
            banner_image: row.banner_image,
            date: row.date,
            starts_time: row.starts_time,
            venue: row.venue,
            google_map_link: row.google_map_link,
            organizer_name: row.organizer_name,
            organizer_contact_info: row.organizer_contact_info,
            special_guests: row.special_guests,
            is_paid_event: row.is_paid_event,
            pricing_ranges: row.pricing_ranges.0,
            seat_limit: row.seat_limit,
            social_media_links: row.social_media_links.0,
            status: row.status.parse()?,
            visibility: row.visibility.parse()?,
            registered_users: row.registered_users.into_iter().map(UserId).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_EVENT: &str = "\
    SELECT id, title, short_description, full_description, banner_image, \
    date, starts_time, venue, google_map_link, organizer_name, \
    organizer_contact_info, special_guests, is_paid_event, pricing_ranges, \
    seat_limit, social_media_links, status, visibility, registered_users, \
    created_at, updated_at FROM events";

/// Append the WHERE clause for a listing query.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &EventQuery) {
    builder.push(" WHERE TRUE");

    if let Some(search) = &query.search {
        let pattern = format!("%{search}%");
        builder.push(" AND (title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR short_description ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR full_description ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR organizer_name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR venue ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
    if let Some(status) = query.status {
        builder.push(" AND status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(visibility) = query.visibility {
        builder.push(" AND visibility = ");
        builder.push_bind(visibility.as_str());
    }
    if let Some(date_from) = query.date_from {
        builder.push(" AND date >= ");
        builder.push_bind(date_from);
    }
    if let Some(date_to) = query.date_to {
        builder.push(" AND date <= ");
        builder.push_bind(date_to);
    }
}

fn order_clause(query: &EventQuery) -> &'static str {
    match (query.sort_by, query.sort_order) {
        (EventSortBy::Date, SortOrder::Asc) => " ORDER BY date ASC",
        (EventSortBy::Date, SortOrder::Desc) => " ORDER BY date DESC",
        (EventSortBy::CreatedAt, SortOrder::Asc) => " ORDER BY created_at ASC",
        (EventSortBy::CreatedAt, SortOrder::Desc) => " ORDER BY created_at DESC",
        (EventSortBy::Title, SortOrder::Asc) => " ORDER BY title ASC",
        (EventSortBy::Title, SortOrder::Desc) => " ORDER BY title DESC",
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn create(&self, event: Event) -> Result<Event, EventError> {
        sqlx::query(
            r#"
            INSERT INTO events (
                id, title, short_description, full_description, banner_image,
                date, starts_time, venue, google_map_link, organizer_name,
                organizer_contact_info, special_guests, is_paid_event,
                pricing_ranges, seat_limit, social_media_links, status,
                visibility, registered_users, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21)
            "#,
        )
        .bind(event.id.0)
        .bind(&event.title)
        .bind(&event.short_description)
        .bind(&event.full_description)
        .bind(event.banner_image.as_deref())
        .bind(event.date)
        .bind(&event.starts_time)
        .bind(&event.venue)
        .bind(event.google_map_link.as_deref())
        .bind(&event.organizer_name)
        .bind(&event.organizer_contact_info)
        .bind(&event.special_guests)
        .bind(event.is_paid_event)
        .bind(Json(&event.pricing_ranges))
        .bind(event.seat_limit)
        .bind(Json(&event.social_media_links))
        .bind(event.status.as_str())
        .bind(event.visibility.as_str())
        .bind(event.registered_users.iter().map(|id| id.0).collect::<Vec<_>>())
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        Ok(event)
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventError> {
        let row = sqlx::query_as::<_, EventRow>(&format!("{SELECT_EVENT} WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        row.map(Event::try_from).transpose()
    }

    async fn list(&self, query: &EventQuery) -> Result<(Vec<Event>, i64), EventError> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(*) FROM events");
        push_filters(&mut count_builder, query);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        let mut builder = QueryBuilder::new(SELECT_EVENT);
        push_filters(&mut builder, query);
        builder.push(order_clause(query));
        builder.push(" LIMIT ");
        builder.push_bind(query.limit as i64);
        builder.push(" OFFSET ");
        builder.push_bind(query.offset());

        let rows = builder
            .build_query_as::<EventRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        let events = rows
            .into_iter()
            .map(Event::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((events, total))
    }

    async fn update(&self, event: Event) -> Result<Event, EventError> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET title = $2, short_description = $3, full_description = $4,
                banner_image = $5, date = $6, starts_time = $7, venue = $8,
                google_map_link = $9, organizer_name = $10,
                organizer_contact_info = $11, special_guests = $12,
                is_paid_event = $13, pricing_ranges = $14, seat_limit = $15,
                social_media_links = $16, status = $17, visibility = $18,
                registered_users = $19, updated_at = $20
            WHERE id = $1
            "#,
        )
        .bind(event.id.0)
        .bind(&event.title)
        .bind(&event.short_description)
        .bind(&event.full_description)
        .bind(event.banner_image.as_deref())
        .bind(event.date)
        .bind(&event.starts_time)
        .bind(&event.venue)
        .bind(event.google_map_link.as_deref())
        .bind(&event.organizer_name)
        .bind(&event.organizer_contact_info)
        .bind(&event.special_guests)
        .bind(event.is_paid_event)
        .bind(Json(&event.pricing_ranges))
        .bind(event.seat_limit)
        .bind(Json(&event.social_media_links))
        .bind(event.status.as_str())
        .bind(event.visibility.as_str())
        .bind(event.registered_users.iter().map(|id| id.0).collect::<Vec<_>>())
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EventError::NotFound(event.id.to_string()));
        }

        Ok(event)
    }

    async fn delete(&self, id: &EventId) -> Result<(), EventError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EventError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
