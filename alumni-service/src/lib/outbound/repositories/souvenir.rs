use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;
use uuid::Uuid;

use crate::souvenir::errors::SouvenirError;
use crate::souvenir::models::Souvenir;
use crate::souvenir::models::SouvenirId;
use crate::souvenir::models::SouvenirQuery;
use crate::souvenir::models::SouvenirSortBy;
use crate::souvenir::ports::SouvenirRepository;

pub struct PostgresSouvenirRepository {
    pool: PgPool,
}

impl PostgresSouvenirRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SouvenirRow {
    id: Uuid,
    category: String,
    name: String,
    batch: String,
    hsc_group: String,
    phone_number: String,
    email: String,
    photo_url: Option<String>,
    photo_urls: Vec<String>,
    content: Option<String>,
    professional_details: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SouvenirRow> for Souvenir {
    fn from(row: SouvenirRow) -> Self {
        Souvenir {
            id: SouvenirId(row.id),
            category: row.category,
            name: row.name,
            batch: row.batch,
            group: row.hsc_group,
            phone_number: row.phone_number,
            email: row.email,
            photo_url: row.photo_url,
            photo_urls: row.photo_urls,
            content: row.content,
            professional_details: row.professional_details,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_SOUVENIR: &str = "\
    SELECT id, category, name, batch, hsc_group, phone_number, email, \
    photo_url, photo_urls, content, professional_details, created_at, \
    updated_at FROM souvenirs";

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &SouvenirQuery) {
    builder.push(" WHERE TRUE");

    if let Some(category) = &query.category {
        builder.push(" AND category = ");
        builder.push_bind(category.clone());
    }
    if let Some(batch) = &query.batch {
        builder.push(" AND batch = ");
        builder.push_bind(batch.clone());
    }
    if let Some(group) = &query.group {
        builder.push(" AND hsc_group = ");
        builder.push_bind(group.clone());
    }
    if let Some(search) = &query.search {
        let pattern = format!("%{search}%");
        builder.push(" AND (name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR email ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

fn order_clause(query: &SouvenirQuery) -> &'static str {
    let sort_by = query.sort_by.unwrap_or(SouvenirSortBy::CreatedAt);
    match (sort_by, query.descending) {
        (SouvenirSortBy::CreatedAt, true) => " ORDER BY created_at DESC",
        (SouvenirSortBy::CreatedAt, false) => " ORDER BY created_at ASC",
        (SouvenirSortBy::Name, true) => " ORDER BY name DESC",
        (SouvenirSortBy::Name, false) => " ORDER BY name ASC",
        (SouvenirSortBy::Batch, true) => " ORDER BY batch DESC",
        (SouvenirSortBy::Batch, false) => " ORDER BY batch ASC",
    }
}

#[async_trait]
impl SouvenirRepository for PostgresSouvenirRepository {
    async fn create(&self, souvenir: Souvenir) -> Result<Souvenir, SouvenirError> {
        sqlx::query(
            r#"
            INSERT INTO souvenirs (id, category, name, batch, hsc_group,
                                   phone_number, email, photo_url, photo_urls,
                                   content, professional_details, created_at,
                                   updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(souvenir.id.0)
        .bind(&souvenir.category)
        .bind(&souvenir.name)
        .bind(&souvenir.batch)
        .bind(&souvenir.group)
        .bind(&souvenir.phone_number)
        .bind(&souvenir.email)
        .bind(souvenir.photo_url.as_deref())
        .bind(&souvenir.photo_urls)
        .bind(souvenir.content.as_deref())
        .bind(souvenir.professional_details.as_deref())
        .bind(souvenir.created_at)
        .bind(souvenir.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| SouvenirError::DatabaseError(e.to_string()))?;

        Ok(souvenir)
    }

    async fn find_by_id(&self, id: &SouvenirId) -> Result<Option<Souvenir>, SouvenirError> {
        let row = sqlx::query_as::<_, SouvenirRow>(&format!("{SELECT_SOUVENIR} WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| SouvenirError::DatabaseError(e.to_string()))?;

        Ok(row.map(Souvenir::from))
    }

    async fn list(&self, query: &SouvenirQuery) -> Result<(Vec<Souvenir>, i64), SouvenirError> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(*) FROM souvenirs");
        push_filters(&mut count_builder, query);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| SouvenirError::DatabaseError(e.to_string()))?;

        let mut builder = QueryBuilder::new(SELECT_SOUVENIR);
        push_filters(&mut builder, query);
        builder.push(order_clause(query));

        let rows = builder
            .build_query_as::<SouvenirRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SouvenirError::DatabaseError(e.to_string()))?;

        Ok((rows.into_iter().map(Souvenir::from).collect(), total))
    }

    async fn update(&self, souvenir: Souvenir) -> Result<Souvenir, SouvenirError> {
        let result = sqlx::query(
            r#"
            UPDATE souvenirs
            SET name = $2, batch = $3, hsc_group = $4, phone_number = $5,
                email = $6, photo_url = $7, photo_urls = $8, content = $9,
                professional_details = $10, updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(souvenir.id.0)
        .bind(&souvenir.name)
        .bind(&souvenir.batch)
        .bind(&souvenir.group)
        .bind(&souvenir.phone_number)
        .bind(&souvenir.email)
        .bind(souvenir.photo_url.as_deref())
        .bind(&souvenir.photo_urls)
        .bind(souvenir.content.as_deref())
        .bind(souvenir.professional_details.as_deref())
        .bind(souvenir.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| SouvenirError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(SouvenirError::NotFound(souvenir.id.to_string()));
        }

        Ok(souvenir)
    }

    async fn delete(&self, id: &SouvenirId) -> Result<(), SouvenirError> {
        let result = sqlx::query("DELETE FROM souvenirs WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| SouvenirError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(SouvenirError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
